//! LLM integration crate for Inkwell.
//!
//! This crate wraps the single outbound call Inkwell makes: a prompt goes to
//! a hosted text-generation provider and the generated text comes back.
//!
//! # Providers
//! - **Gemini**: Google's `generateContent` API (default)
//!
//! # Example
//! ```no_run
//! use inkwell_llm::{CompletionConfig, Completer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CompletionConfig::default().with_api_key("...");
//! let completer = Completer::from_config(&config)?;
//! let text = completer.complete("Suggest a title for a gardening ebook").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod completion;
pub mod factory;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
pub use completion::Completer;
pub use factory::create_client;
pub use providers::GeminiClient;
pub use types::CompletionConfig;
