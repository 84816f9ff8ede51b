//! Gemini LLM provider implementation.
//!
//! Calls the `generateContent` endpoint of the Gemini API:
//! https://ai.google.dev/api/generate-content

use crate::client::{LlmClient, LlmRequest, LlmResponse, LlmUsage};
use inkwell_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Public Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata", default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(rename = "modelVersion", default)]
    model_version: Option<String>,
    #[serde(rename = "promptFeedback", default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason", default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    /// Reasoning parts emitted by thinking models; not part of the answer
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason", default)]
    block_reason: Option<String>,
}

/// Gemini LLM client.
pub struct GeminiClient {
    /// Base URL for the Gemini API
    base_url: String,

    /// API key sent as `x-goog-api-key`
    api_key: Option<String>,

    /// HTTP client
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a client for the public Gemini API.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_http_client(base_url, api_key, reqwest::Client::new())
    }

    /// Create a client that sends requests through an existing HTTP client.
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert LlmRequest to Gemini format.
    fn to_gemini_request(&self, request: &LlmRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.prompt.clone(),
                }],
            }],
        }
    }

    /// Convert a Gemini response to LlmResponse.
    ///
    /// The text is the concatenation of the first candidate's non-thought
    /// parts, unmodified. A response without any text is an error.
    fn convert_response(
        &self,
        response: GenerateContentResponse,
        requested_model: &str,
    ) -> AppResult<LlmResponse> {
        let block_reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);

        let candidate = response.candidates.into_iter().next().ok_or_else(|| {
            AppError::Llm(format!(
                "Gemini response contained no candidates (block reason: {})",
                block_reason.as_deref().unwrap_or("none")
            ))
        })?;

        let finish_reason = candidate.finish_reason;
        let content: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text)
            .collect();

        if content.is_empty() {
            return Err(AppError::Llm(format!(
                "Gemini response contained no text (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        let usage = response
            .usage_metadata
            .map(|u| LlmUsage::new(u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        Ok(LlmResponse {
            content,
            model: response
                .model_version
                .unwrap_or_else(|| requested_model.to_string()),
            usage,
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &LlmRequest) -> AppResult<LlmResponse> {
        tracing::info!("Sending completion request to Gemini");
        tracing::debug!("Model: {}, prompt length: {}", request.model, request.prompt.len());

        let gemini_request = self.to_gemini_request(request);
        let url = self.generate_url(&request.model);

        let mut builder = self.client.post(&url).json(&gemini_request);
        if let Some(ref key) = self.api_key {
            builder = builder.header("x-goog-api-key", key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to send request to Gemini: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Llm(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let gemini_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        tracing::info!("Received completion from Gemini");
        tracing::debug!("Response: {:?}", gemini_response);

        self.convert_response(gemini_response, &request.model)
    }
}
