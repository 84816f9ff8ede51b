//! Completion client used by the application.
//!
//! [`Completer`] issues exactly one provider request per call and reduces
//! every failure to [`AppError::GenerationFailed`]. The provider's own error
//! is logged for operators and then dropped.

use crate::client::{LlmClient, LlmRequest, LlmResponse};
use crate::factory::create_client;
use crate::types::CompletionConfig;
use inkwell_core::{AppError, AppResult};
use std::sync::Arc;

/// Sends prompts to a configured provider with a fixed model.
///
/// Holds no mutable state; concurrent calls are independent.
#[derive(Clone)]
pub struct Completer {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl Completer {
    /// Create a completer around any provider client.
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create a completer for the provider named in `config`.
    pub fn from_config(config: &CompletionConfig) -> AppResult<Self> {
        tracing::debug!("Creating completer: {:?}", config);
        let client = create_client(
            &config.provider,
            config.endpoint.as_deref(),
            config.api_key.as_deref(),
        )?;
        Ok(Self::new(client, config.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn provider_name(&self) -> &str {
        self.client.provider_name()
    }

    /// Generate text for `prompt`.
    ///
    /// Returns the provider's text exactly as received.
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.complete_response(prompt)
            .await
            .map(|response| response.content)
    }

    /// Generate text for `prompt`, keeping the response metadata.
    pub async fn complete_response(&self, prompt: &str) -> AppResult<LlmResponse> {
        let request = LlmRequest::new(prompt, self.model.as_str());

        match self.client.complete(&request).await {
            Ok(response) if !response.content.is_empty() => {
                tracing::debug!(
                    "Token usage - Prompt: {}, Completion: {}, Total: {}",
                    response.usage.prompt_tokens,
                    response.usage.completion_tokens,
                    response.usage.total_tokens
                );
                Ok(response)
            }
            Ok(_) => {
                tracing::error!(
                    provider = self.client.provider_name(),
                    model = %self.model,
                    "Completion request returned empty text"
                );
                Err(AppError::GenerationFailed)
            }
            Err(e) => {
                tracing::error!(
                    provider = self.client.provider_name(),
                    model = %self.model,
                    error = %e,
                    "Completion request failed"
                );
                Err(AppError::GenerationFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LlmUsage;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tracing::instrument::WithSubscriber;

    /// Scripted provider that records the requests it receives.
    struct FakeClient {
        reply: Box<dyn Fn(&LlmRequest) -> AppResult<String> + Send + Sync>,
        calls: AtomicUsize,
        last_request: Mutex<Option<LlmRequest>>,
    }

    impl FakeClient {
        fn new<F>(reply: F) -> Arc<Self>
        where
            F: Fn(&LlmRequest) -> AppResult<String> + Send + Sync + 'static,
        {
            Arc::new(Self {
                reply: Box::new(reply),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }
    }

    #[async_trait::async_trait]
    impl LlmClient for FakeClient {
        fn provider_name(&self) -> &str {
            "fake"
        }

        async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            let content = (self.reply)(request)?;
            Ok(LlmResponse {
                content,
                model: request.model.clone(),
                usage: LlmUsage::new(3, 5),
            })
        }
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs() -> (LogBuffer, impl tracing::Subscriber + Send + Sync) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        (buffer, subscriber)
    }

    #[tokio::test]
    async fn test_complete_returns_text_unaltered() {
        let text = "  Chapter 1\n\nSome *markdown* output.\n\n";
        let client = FakeClient::new(move |_| Ok(text.to_string()));
        let completer = Completer::new(client.clone(), "gemini-2.5-flash");

        let result = completer.complete("Write chapter one").await.unwrap();
        assert_eq!(result, text);

        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
        let request = client.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.prompt, "Write chapter one");
        assert_eq!(request.model, "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_provider_error_becomes_generation_failed() {
        let client = FakeClient::new(|_| {
            Err(AppError::Llm(
                "Failed to send request to Gemini: connection refused".to_string(),
            ))
        });
        let completer = Completer::new(client.clone(), "gemini-2.5-flash");
        let (logs, subscriber) = capture_logs();

        let err = completer
            .complete("prompt")
            .with_subscriber(subscriber)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::GenerationFailed));
        assert!(!err.to_string().contains("connection refused"));
        assert!(err.to_string().contains("check your connection or API key"));
        assert_eq!(client.calls.load(Ordering::SeqCst), 1, "no retry");

        let logged = logs.contents();
        assert!(logged.contains("Completion request failed"));
        assert!(logged.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_empty_text_becomes_generation_failed() {
        let client = FakeClient::new(|_| Ok(String::new()));
        let completer = Completer::new(client, "gemini-2.5-flash");

        let err = completer.complete("prompt").await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed));
    }

    #[tokio::test]
    async fn test_complete_response_keeps_usage() {
        let client = FakeClient::new(|_| Ok("ok".to_string()));
        let completer = Completer::new(client, "m");

        let response = completer.complete_response("p").await.unwrap();
        assert_eq!(response.usage.total_tokens, 8);
        assert_eq!(response.model, "m");
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let client = FakeClient::new(|req| Ok(format!("echo: {}", req.prompt)));
        let completer = Completer::new(client.clone(), "m");

        let prompts = ["one", "two", "three"];
        let results =
            futures::future::join_all(prompts.iter().map(|p| completer.complete(p))).await;

        for (prompt, result) in prompts.iter().zip(results) {
            assert_eq!(result.unwrap(), format!("echo: {}", prompt));
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_surfaces_generic_failure() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        let gemini = crate::providers::GeminiClient::with_http_client(
            format!("http://{}", addr),
            Some("key".to_string()),
            http,
        );
        let completer = Completer::new(Arc::new(gemini), "gemini-2.5-flash");

        let err = completer.complete("prompt").await.unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed));
    }

    #[test]
    fn test_from_config() {
        let config = CompletionConfig::default().with_api_key("k");
        let completer = Completer::from_config(&config).unwrap();
        assert_eq!(completer.provider_name(), "gemini");
        assert_eq!(completer.model(), "gemini-2.5-flash");
    }

    #[test]
    fn test_from_config_unknown_provider() {
        let config = CompletionConfig::new("openai", "gpt-4");
        assert!(matches!(
            Completer::from_config(&config),
            Err(AppError::Config(_))
        ));
    }
}
