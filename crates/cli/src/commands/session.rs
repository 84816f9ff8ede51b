//! Session command handler.
//!
//! A line-oriented interactive loop: pick an action, fill in its fields,
//! generate, repeat.

use super::actions::{write_action, write_catalog};
use super::input::parse_action;
use crate::session::Session;
use clap::Args;
use inkwell_core::{config::AppConfig, AppError, AppResult};
use inkwell_llm::{Completer, CompletionConfig};
use inkwell_prompt::{ActionKind, FieldSet, PromptBuilder};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  actions              list the writing actions
  use <action>         switch to another action
  set <field> <value>  set a field (omit the value to enter lines, end with '.')
  unset <field>        clear a field
  sample               load the sample inputs
  show                 show the current action and its fields
  prompt               print the prompt that would be sent
  generate             send the prompt and print the result
  output               print the last result again
  help                 show this help
  quit                 leave the session";

/// Start an interactive writing session
#[derive(Args, Debug)]
pub struct SessionCommand {
    /// Action selected at start
    #[arg(long, default_value = "outline", value_parser = parse_action)]
    pub action: ActionKind,

    /// Start with the sample inputs loaded
    #[arg(long)]
    pub sample: bool,
}

impl SessionCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing session command");

        let completer = Completer::from_config(&CompletionConfig::from(config))?;
        let builder = PromptBuilder::new()?;

        let mut session = Session::new(self.action, FieldSet::new());
        if self.sample {
            session.load_sample();
        }

        let mut input = std::io::stdin().lock();
        let mut out = std::io::stdout().lock();
        run_session(&mut session, &builder, &completer, &mut input, &mut out).await
    }
}

#[derive(Debug, PartialEq, Eq)]
enum SessionInput {
    Empty,
    Help,
    Actions,
    Use(ActionKind),
    Set(String, Option<String>),
    Unset(String),
    Sample,
    Show,
    Prompt,
    Generate,
    Output,
    Quit,
}

impl SessionInput {
    fn parse(line: &str) -> AppResult<Self> {
        let (command, rest) = split_word(line.trim_start());

        let parsed = match command {
            "" => Self::Empty,
            "help" | "?" => Self::Help,
            "actions" => Self::Actions,
            "use" => Self::Use(rest.parse()?),
            "set" => {
                let (name, value) = split_word(rest);
                if name.is_empty() {
                    return Err(AppError::Config("Usage: set <field> [value]".to_string()));
                }
                let value = (!value.is_empty()).then(|| value.to_string());
                Self::Set(name.to_string(), value)
            }
            "unset" if !rest.is_empty() => Self::Unset(rest.trim_end().to_string()),
            "unset" => return Err(AppError::Config("Usage: unset <field>".to_string())),
            "sample" => Self::Sample,
            "show" => Self::Show,
            "prompt" => Self::Prompt,
            "generate" | "go" => Self::Generate,
            "output" => Self::Output,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(AppError::Config(format!(
                    "Unknown command '{}'. Type 'help' for commands.",
                    other
                )))
            }
        };

        Ok(parsed)
    }
}

/// Split off the first word; the rest follows the whitespace run after it, untouched.
fn split_word(input: &str) -> (&str, &str) {
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

/// Drive a session from `input` until `quit` or end of input.
pub async fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    builder: &PromptBuilder,
    completer: &Completer,
    input: &mut R,
    out: &mut W,
) -> AppResult<()> {
    writeln!(out, "Inkwell session. Type 'help' for commands.")?;

    let mut line = String::new();
    loop {
        write!(out, "{}> ", session.action())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match SessionInput::parse(line.trim_end_matches(['\r', '\n'])) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        tracing::debug!("Session input: {:?}", command);

        match command {
            SessionInput::Empty => {}
            SessionInput::Help => writeln!(out, "{}", HELP)?,
            SessionInput::Actions => write_catalog(out, Some(session.action()))?,
            SessionInput::Use(action) => {
                session.select_action(action);
                write_action(out, action)?;
            }
            SessionInput::Set(name, value) => {
                let value = match value {
                    Some(value) => value,
                    None => read_block(input, out)?,
                };
                if session.action().field(&name).is_none() {
                    writeln!(out, "Note: {} does not use '{}'", session.action(), name)?;
                }
                session.set_field(name, value);
            }
            SessionInput::Unset(name) => {
                session.clear_field(&name);
            }
            SessionInput::Sample => {
                session.load_sample();
                writeln!(out, "Sample inputs loaded.")?;
            }
            SessionInput::Show => write_state(out, session)?,
            SessionInput::Prompt => match builder.build_request(&session.request()) {
                Ok(built) => writeln!(out, "{}", built.text)?,
                Err(e) => writeln!(out, "Error: {}", e)?,
            },
            SessionInput::Generate => submit(session, builder, completer, out).await?,
            SessionInput::Output => match session.output() {
                Some(text) => writeln!(out, "{}", text)?,
                None => writeln!(out, "No output yet.")?,
            },
            SessionInput::Quit => break,
        }
    }

    Ok(())
}

async fn submit<W: Write>(
    session: &mut Session,
    builder: &PromptBuilder,
    completer: &Completer,
    out: &mut W,
) -> AppResult<()> {
    let Some(request) = session.begin_submit() else {
        writeln!(out, "A request is already in progress.")?;
        return Ok(());
    };

    writeln!(out, "Generating content...")?;
    out.flush()?;

    let result = match builder.build_request(&request) {
        Ok(built) => completer.complete(&built.text).await,
        Err(e) => Err(e),
    };
    session.finish(result);

    if let Some(text) = session.output() {
        writeln!(out, "{}", text)?;
    } else if let Some(error) = session.error() {
        writeln!(out, "Error: {}", error)?;
    }

    Ok(())
}

/// Read lines until one consisting of a single `.`; returns them joined by newlines.
fn read_block<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> AppResult<String> {
    writeln!(out, "Enter text, finish with a line containing only '.'")?;
    out.flush()?;

    let mut lines = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim_end_matches(['\r', '\n']);
        if text == "." {
            break;
        }
        lines.push(text.to_string());
    }

    Ok(lines.join("\n"))
}

fn write_state<W: Write>(out: &mut W, session: &Session) -> AppResult<()> {
    let action = session.action();
    write_action(out, action)?;
    writeln!(out)?;

    for field in action.fields() {
        match session.fields().value(field.name) {
            Some(value) => writeln!(out, "  {} = {}", field.name, value)?,
            None => writeln!(out, "  {} (empty, uses \"{}\")", field.name, field.fallback)?,
        }
    }

    Ok(())
}
