// OpenAI-compatible chat-completion client.
//
// POSTs to `{base_url}/chat/completions` with a bearer token and returns the
// first choice's message content. Every call waits on the rate limiter
// first. There is no retry: a failure is returned to the caller as-is.
//
// API docs: https://platform.openai.com/docs/api-reference/chat/create

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::rate_limiter::RateLimiter;
use super::traits::{ChatRequest, TextGenerator};
use crate::error::{Result, TextbenchError};

/// Chat-completion client for OpenAI and API-compatible servers.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl OpenAiClient {
    /// Create a new client. `base_url` is the API root, e.g. `https://api.openai.com/v1`.
    pub fn new(api_key: String, base_url: &str, rate_limiter: RateLimiter) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("textbench/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                TextbenchError::RemoteCallFailure(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, request: &ChatRequest) -> Result<String> {
        // Respect rate limits before making the call
        self.rate_limiter.acquire().await;

        debug!(
            model = %request.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "Chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                TextbenchError::RemoteCallFailure(format!("Chat completion request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TextbenchError::RemoteCallFailure(format!(
                "Chat completion API returned {status}: {}",
                api_error_message(&body)
            )));
        }

        let body: ChatCompletionResponse = response.json().await.map_err(|e| {
            TextbenchError::RemoteCallFailure(format!(
                "Failed to parse chat completion response: {e}"
            ))
        })?;

        first_choice_text(body)
    }
}

/// Pull the trimmed content of the first choice out of a parsed response.
fn first_choice_text(body: ChatCompletionResponse) -> Result<String> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default().trim().to_string())
        .ok_or_else(|| {
            TextbenchError::RemoteCallFailure("Chat completion returned no choices".to_string())
        })
}

/// Prefer the API's own error message over the raw body when it has one.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// --- Chat completion response types ---

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_choice_text_trims() {
        let json = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  government, health, policy \n"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "ignored"}, "finish_reason": "stop"}
            ]
        }"#;
        let body: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(first_choice_text(body).unwrap(), "government, health, policy");
    }

    #[test]
    fn test_first_choice_text_empty_choices_fails() {
        let body: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = first_choice_text(body).unwrap_err();
        assert!(matches!(err, TextbenchError::RemoteCallFailure(_)));
    }

    #[test]
    fn test_null_content_becomes_empty() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let body: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(first_choice_text(body).unwrap(), "");
    }

    #[test]
    fn test_api_error_message_extracted() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(api_error_message(body), "Incorrect API key provided");
        assert_eq!(api_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenAiClient::new(
            "sk-test".to_string(),
            "http://localhost:8080/v1/",
            RateLimiter::with_interval(std::time::Duration::ZERO),
        )
        .unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_remote_failure() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = OpenAiClient::new(
            "sk-test".to_string(),
            "http://127.0.0.1:9/v1",
            RateLimiter::with_interval(std::time::Duration::ZERO),
        )
        .unwrap();
        let request = ChatRequest::new("gpt-3.5-turbo", vec![]);
        let err = client.generate(&request).await.unwrap_err();
        assert!(matches!(err, TextbenchError::RemoteCallFailure(_)));
    }
}
