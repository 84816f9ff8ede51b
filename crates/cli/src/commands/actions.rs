//! Actions command handler.
//!
//! Lists the writing actions and the fields each one reads.

use clap::Args;
use inkwell_core::AppResult;
use inkwell_prompt::{catalog, ActionDetails, ActionKind};
use std::io::Write;

/// List the available writing actions
#[derive(Args, Debug)]
pub struct ActionsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ActionsCommand {
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing actions command");

        let mut stdout = std::io::stdout().lock();
        if self.json {
            let details: Vec<&ActionDetails> = catalog().collect();
            let json = serde_json::to_string_pretty(&details)?;
            writeln!(stdout, "{}", json)?;
        } else {
            write_catalog(&mut stdout, None)?;
        }

        Ok(())
    }
}

/// Write the catalog as text, marking `current` if given.
pub fn write_catalog(out: &mut impl Write, current: Option<ActionKind>) -> AppResult<()> {
    for details in catalog() {
        let marker = if Some(details.action) == current { "*" } else { " " };
        writeln!(
            out,
            "{} {:<8} {:<14} {}",
            marker, details.action, details.label, details.summary
        )?;
    }
    Ok(())
}

/// Write one action's heading, description and fields.
pub fn write_action(out: &mut impl Write, action: ActionKind) -> AppResult<()> {
    let details = action.details();
    writeln!(out, "{}", details.title)?;
    writeln!(out, "{}", details.description)?;
    writeln!(out)?;
    for field in details.fields {
        let kind = if field.multiline { "text" } else { "line" };
        writeln!(
            out,
            "  {:<14} {} ({}; {})",
            field.name, field.label, kind, field.placeholder
        )?;
    }
    Ok(())
}
