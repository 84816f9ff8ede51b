//! Prompt system for Inkwell.
//!
//! This crate provides:
//! - The action catalog (titles, descriptions and form fields per action)
//! - Handlebars template rendering with per-field fallbacks

pub mod builder;
pub mod catalog;
pub mod types;

// Re-export main types
pub use builder::{build_prompt, build_prompt_for, PromptBuilder};
pub use catalog::{catalog, ActionDetails, FieldSpec};
pub use types::{ActionKind, BuiltPrompt, FieldSet, PromptRequest};
