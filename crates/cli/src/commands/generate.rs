//! Generate command handler.
//!
//! Builds the prompt for an action and prints the provider's response.

use super::input::ActionInput;
use clap::Args;
use inkwell_core::{config::AppConfig, AppResult};
use inkwell_llm::{Completer, CompletionConfig};
use inkwell_prompt::PromptBuilder;

/// Generate content for an action
#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: ActionInput,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing generate command");
        tracing::debug!("Generate command options: {:?}", self);

        // 1. Render the prompt
        let request = self.input.to_request()?;
        let built = PromptBuilder::new()?.build_request(&request)?;
        tracing::debug!(
            "Built {} prompt ({} bytes, fallbacks: {:?})",
            built.action,
            built.text.len(),
            built.fallbacks
        );

        // 2. Create the completer from configuration
        let completer = Completer::from_config(&CompletionConfig::from(config))?;

        // 3. Single request, no retry
        let response = completer.complete_response(&built.text).await?;

        if self.json {
            let output = serde_json::json!({
                "action": built.action,
                "output": response.content,
                "model": response.model,
                "provider": completer.provider_name(),
                "usage": {
                    "promptTokens": response.usage.prompt_tokens,
                    "completionTokens": response.usage.completion_tokens,
                    "totalTokens": response.usage.total_tokens
                },
                "prompt": {
                    "resolvedFields": built.resolved,
                    "fallbacksUsed": built.fallbacks
                }
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", response.content);
        }

        Ok(())
    }
}
