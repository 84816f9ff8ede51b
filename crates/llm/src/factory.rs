//! LLM provider factory.
//!
//! Creates an LLM client from a provider name, an optional endpoint and an
//! optional API key.

use crate::client::LlmClient;
use crate::providers::GeminiClient;
use inkwell_core::{AppError, AppResult};
use std::sync::Arc;

/// Create an LLM client based on the provider name.
///
/// A missing API key is not rejected here. The request is sent without
/// credentials and the provider's rejection surfaces as a completion failure.
///
/// # Errors
/// Returns `AppError::Config` if the provider is unknown.
pub fn create_client(
    provider: &str,
    endpoint: Option<&str>,
    api_key: Option<&str>,
) -> AppResult<Arc<dyn LlmClient>> {
    match provider.to_lowercase().as_str() {
        "gemini" | "google" => {
            if api_key.is_none() {
                tracing::warn!("No API key configured for Gemini; set API_KEY or GEMINI_API_KEY");
            }
            let api_key = api_key.map(str::to_string);
            let client = match endpoint {
                Some(base_url) => GeminiClient::with_base_url(base_url, api_key),
                None => GeminiClient::new(api_key),
            };
            Ok(Arc::new(client))
        }
        _ => Err(AppError::Config(format!(
            "Unknown provider: {}. Supported: gemini",
            provider
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gemini_client() {
        let client = create_client("gemini", None, Some("key")).unwrap();
        assert_eq!(client.provider_name(), "gemini");
    }

    #[test]
    fn test_google_alias_and_case() {
        let client = create_client("Google", Some("http://localhost:8080"), None).unwrap();
        assert_eq!(client.provider_name(), "gemini");
    }

    #[test]
    fn test_missing_api_key_is_not_fatal() {
        assert!(create_client("gemini", None, None).is_ok());
    }

    #[test]
    fn test_unknown_provider() {
        match create_client("ollama", None, None) {
            Err(err) => assert!(err.to_string().contains("Unknown provider")),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
