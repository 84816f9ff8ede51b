//! Inkwell CLI
//!
//! Main entry point for the inkwell command-line tool.
//! Turns a few lines of input into prompts for outlining, drafting, and
//! polishing an ebook, and sends them to a hosted model.

mod commands;
mod session;

use clap::{Parser, Subcommand};
use commands::{ActionsCommand, GenerateCommand, PromptCommand, SessionCommand};
use inkwell_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;

/// Inkwell - AI writing assistant for ebook authors
#[derive(Parser, Debug)]
#[command(name = "inkwell")]
#[command(about = "AI writing assistant for ebook authors", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "INKWELL_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG is read when unset
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also disabled when NO_COLOR is set)
    #[arg(long, global = true)]
    no_color: bool,

    /// LLM provider (gemini)
    #[arg(short, long, global = true, env = "INKWELL_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "INKWELL_MODEL")]
    model: Option<String>,

    /// Provider base URL
    #[arg(long, global = true, env = "INKWELL_ENDPOINT")]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the writing actions and their fields
    Actions(ActionsCommand),

    /// Print the prompt an action would send
    Prompt(PromptCommand),

    /// Generate content for an action
    Generate(GenerateCommand),

    /// Interactive writing session
    Session(SessionCommand),
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Config file and environment first, then CLI overrides
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(
        cli.provider,
        cli.model,
        cli.endpoint,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );
    config.validate()?;

    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Inkwell CLI starting");
    tracing::debug!("Config file: {:?}", config.config_file);
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    let command_name = match &cli.command {
        Commands::Actions(_) => "actions",
        Commands::Prompt(_) => "prompt",
        Commands::Generate(_) => "generate",
        Commands::Session(_) => "session",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Actions(cmd) => cmd.execute().await,
        Commands::Prompt(cmd) => cmd.execute().await,
        Commands::Generate(cmd) => cmd.execute(&config).await,
        Commands::Session(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
