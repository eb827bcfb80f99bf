// Text generator trait: the swap-ready abstraction.
//
// A request is a model name, role/content messages, temperature and an
// output token cap. The response is a single free-text completion taken
// as opaque text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single message in a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request for a chat completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: 1.0,
            max_tokens: 256,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// The content of the last user message, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

/// Trait for generating text from a chat request. Implementations must be
/// async because the real provider is an HTTP API.
///
/// Errors are always `TextbenchError::RemoteCallFailure`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion and return the trimmed text of the first choice.
    async fn generate(&self, request: &ChatRequest) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_openai_shape() {
        let request = ChatRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")])
            .with_temperature(0.5)
            .with_max_tokens(60);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["max_tokens"], 60);
    }

    #[test]
    fn test_prompt_is_last_user_message() {
        let request = ChatRequest::new(
            "m",
            vec![
                ChatMessage::user("first"),
                ChatMessage {
                    role: "assistant".to_string(),
                    content: "ok".to_string(),
                },
                ChatMessage::user("second"),
            ],
        );
        assert_eq!(request.prompt(), Some("second"));
    }
}
