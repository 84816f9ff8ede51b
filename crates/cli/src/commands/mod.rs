//! Command handlers for the Inkwell CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod actions;
pub mod generate;
pub mod input;
pub mod prompt;
pub mod session;

// Re-export command types for convenience
pub use actions::ActionsCommand;
pub use generate::GenerateCommand;
pub use prompt::PromptCommand;
pub use session::SessionCommand;
