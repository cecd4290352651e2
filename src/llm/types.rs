//! Common types for chat completions.

use serde::{Deserialize, Serialize};

use super::error::CompletionError;

// ============================================================================
// Caller-facing types
// ============================================================================

/// A single-turn completion request.
///
/// Constructed per call and discarded after use. [`CompletionRequest::new`]
/// validates the fields; providers re-validate before touching the network.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub model: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl CompletionRequest {
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Result<Self, CompletionError> {
        let request = Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature,
            max_output_tokens,
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the request against the contract preconditions.
    pub fn validate(&self) -> Result<(), CompletionError> {
        if self.prompt.is_empty() {
            return Err(CompletionError::InvalidRequest(
                "prompt must not be empty".to_string(),
            ));
        }
        if self.model.is_empty() {
            return Err(CompletionError::InvalidRequest(
                "model must not be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(CompletionError::InvalidRequest(format!(
                "temperature must be within [0, 2], got {}",
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(CompletionError::InvalidRequest(
                "max_output_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// The generated text from a successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

// ============================================================================
// Wire types (OpenAI-compatible format)
// ============================================================================

/// A chat completion request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl From<&CompletionRequest> for ChatRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model.clone(),
            messages: vec![Message {
                role: Role::User,
                content: request.prompt.clone(),
            }],
            temperature: Some(request.temperature),
            max_tokens: Some(request.max_output_tokens),
        }
    }
}

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

/// The role of a message sender.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A chat completion response body.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

/// A single completion choice.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct Choice {
    pub message: Message,
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_validation() {
        assert!(CompletionRequest::new("Hello", "test/model", 0.7, 150).is_ok());

        let empty_prompt = CompletionRequest::new("", "test/model", 0.7, 150);
        assert!(matches!(
            empty_prompt,
            Err(CompletionError::InvalidRequest(_))
        ));

        let empty_model = CompletionRequest::new("Hello", "", 0.7, 150);
        assert!(matches!(
            empty_model,
            Err(CompletionError::InvalidRequest(_))
        ));

        let hot = CompletionRequest::new("Hello", "test/model", 2.5, 150);
        assert!(matches!(hot, Err(CompletionError::InvalidRequest(_))));

        let no_tokens = CompletionRequest::new("Hello", "test/model", 0.7, 0);
        assert!(matches!(no_tokens, Err(CompletionError::InvalidRequest(_))));
    }

    #[test]
    fn test_temperature_bounds_are_inclusive() {
        assert!(CompletionRequest::new("Hi", "m", 0.0, 1).is_ok());
        assert!(CompletionRequest::new("Hi", "m", 2.0, 1).is_ok());
    }

    #[test]
    fn test_chat_request_from_completion_request() {
        let request = CompletionRequest::new("Hello!", "openai/gpt-4o-mini", 0.7, 150).unwrap();
        let wire = ChatRequest::from(&request);

        let json = serde_json::to_string(&wire).unwrap();
        assert!(json.contains("\"model\":\"openai/gpt-4o-mini\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"content\":\"Hello!\""));
        assert!(json.contains("\"temperature\":0.7"));
        assert!(json.contains("\"max_tokens\":150"));
    }

    #[test]
    fn test_chat_request_single_user_turn() {
        let request = CompletionRequest::new("Hi", "test/model", 1.0, 10).unwrap();
        let wire = ChatRequest::from(&request);

        assert_eq!(wire.messages.len(), 1);
        assert_eq!(wire.messages[0].role, Role::User);
        assert_eq!(wire.messages[0].content, "Hi");
    }

    #[test]
    fn test_chat_request_without_optional_fields() {
        let wire = ChatRequest {
            model: "openai/gpt-4".to_string(),
            messages: vec![Message {
                role: Role::User,
                content: "Hi".to_string(),
            }],
            temperature: None,
            max_tokens: None,
        };

        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("temperature"));
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "Hello! How can I help you today?"
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 8,
                "total_tokens": 18
            }
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(
            response.choices[0].message.content,
            "Hello! How can I help you today?"
        );
        assert_eq!(response.choices[0].finish_reason, Some("stop".to_string()));

        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 10);
        assert_eq!(usage.completion_tokens, 8);
        assert_eq!(usage.total_tokens, 18);
    }

    #[test]
    fn test_chat_response_without_usage() {
        let json = r#"{
            "choices": [
                {
                    "message": {
                        "role": "assistant",
                        "content": "Response"
                    },
                    "finish_reason": null
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.usage.is_none());
        assert!(response.choices[0].finish_reason.is_none());
    }

    #[test]
    fn test_message_roles() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );

        assert_eq!(
            serde_json::from_str::<Role>("\"assistant\"").unwrap(),
            Role::Assistant
        );
    }
}
