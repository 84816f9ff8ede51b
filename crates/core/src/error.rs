//! Error types for Inkwell.
//!
//! This module defines a unified error enum covering configuration, I/O,
//! provider, prompt and generation failures.

use thiserror::Error;

/// Message shown to the user when a completion request fails.
///
/// Provider detail is logged, never included here.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to get a response from the AI. Please check your connection or API key.";

/// Unified error type for Inkwell.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Provider errors with full diagnostic detail
    #[error("LLM error: {0}")]
    Llm(String),

    /// Prompt template errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// An action name outside the six supported actions
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// A completion request failed; the cause has already been logged
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    GenerationFailed,

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
