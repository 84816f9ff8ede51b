//! Prompt command handler.
//!
//! Renders the prompt for an action without contacting the provider.

use super::input::ActionInput;
use clap::Args;
use inkwell_core::AppResult;
use inkwell_prompt::PromptBuilder;

/// Print the prompt an action would send
#[derive(Args, Debug)]
pub struct PromptCommand {
    #[command(flatten)]
    pub input: ActionInput,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PromptCommand {
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing prompt command");
        tracing::debug!("Prompt command options: {:?}", self);

        let request = self.input.to_request()?;
        let built = PromptBuilder::new()?.build_request(&request)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&built)?);
        } else {
            println!("{}", built.text);
        }

        Ok(())
    }
}
