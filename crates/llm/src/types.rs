//! Completion client configuration.

use inkwell_core::AppConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Completer`](crate::Completer), fixed at construction.
#[derive(Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Provider name (e.g., "gemini")
    pub provider: String,

    /// Model identifier sent with every request
    pub model: String,

    /// Custom base URL for the provider API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// API credential
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl CompletionConfig {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            endpoint: None,
            api_key: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self::new(
            inkwell_core::config::DEFAULT_PROVIDER,
            inkwell_core::config::DEFAULT_MODEL,
        )
    }
}

impl From<&AppConfig> for CompletionConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

// The credential never appears in logs.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompletionConfig::default();
        assert_eq!(config.provider, "gemini");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_from_app_config() {
        let mut app = AppConfig::default();
        app.model = "gemini-2.5-pro".to_string();
        app.api_key = Some("k".to_string());

        let config = CompletionConfig::from(&app);
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = CompletionConfig::default().with_api_key("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_serialize_skips_api_key() {
        let config = CompletionConfig::default().with_api_key("super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }
}
