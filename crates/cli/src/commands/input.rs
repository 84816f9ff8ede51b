//! Action and field arguments shared by the `prompt` and `generate` commands.

use clap::Args;
use inkwell_core::{AppError, AppResult};
use inkwell_prompt::{ActionKind, FieldSet, PromptRequest};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Action selection plus its field values
#[derive(Args, Debug)]
pub struct ActionInput {
    /// Action to run (outline, draft, enhance, polish, design, title)
    #[arg(value_parser = parse_action)]
    pub action: ActionKind,

    /// Field value as NAME=VALUE (repeatable), e.g. -f topic="Home composting"
    #[arg(short, long = "field", value_name = "NAME=VALUE", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    /// Read a field value from a file as NAME=PATH ("-" reads stdin)
    #[arg(long = "field-file", value_name = "NAME=PATH", value_parser = parse_field_file)]
    pub field_files: Vec<(String, PathBuf)>,

    /// Start from the built-in sample inputs
    #[arg(long)]
    pub sample: bool,
}

impl ActionInput {
    /// Assemble the request: samples first, then files, then inline values.
    pub fn to_request(&self) -> AppResult<PromptRequest> {
        let mut fields = if self.sample {
            FieldSet::sample()
        } else {
            FieldSet::new()
        };

        for (name, path) in &self.field_files {
            fields.set(name.clone(), read_field_file(path)?);
        }

        for (name, value) in &self.fields {
            fields.set(name.clone(), value.clone());
        }

        for (name, _) in fields.iter() {
            if self.action.field(name).is_none() {
                tracing::warn!("Field '{}' is not used by the {} action", name, self.action);
            }
        }

        Ok(PromptRequest::new(self.action, fields))
    }
}

pub(crate) fn parse_action(s: &str) -> Result<ActionKind, String> {
    s.parse().map_err(|e: AppError| e.to_string())
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    FieldSet::parse_assignment(s).map_err(|e| e.to_string())
}

fn parse_field_file(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = parse_field(s)?;
    if path.is_empty() {
        return Err(format!("Missing path in '{}'", s));
    }
    Ok((name, PathBuf::from(path)))
}

/// Read a field file verbatim; `-` means stdin.
fn read_field_file(path: &Path) -> AppResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read field file {:?}: {}", path, e),
        ))
    })
}
