//! Provider implementations of [`LlmClient`](crate::LlmClient).

pub mod gemini;

pub use gemini::GeminiClient;
