//! Inkwell Core Library
//!
//! This crate provides the foundational utilities shared by the Inkwell crates:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure
//! - Configuration management

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult, GENERATION_FAILED_MESSAGE};
