use serde::{Deserialize, Serialize};

/// Sampling temperature used for every chat completion.
pub const CHAT_TEMPERATURE: f32 = 1.1;
pub const CHAT_PRESENCE_PENALTY: f32 = 0.0;
pub const CHAT_FREQUENCY_PENALTY: f32 = 0.0;

pub const IMAGE_MODEL: &str = "dall-e-3";
pub const IMAGE_SIZE: &str = "1024x1024";

/// One chat message, forwarded to the provider as-is.
///
/// `content` is kept as raw JSON (a string, an array of content parts, or
/// null for tool-call replies) and any other fields the caller or provider
/// sets (`name`, `tool_calls`, `refusal`, ...) survive the round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: serde_json::Value::String(content.into()),
            extra: serde_json::Map::new(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}

/// Chat model profile exposed by the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatModel {
    #[default]
    Standard,
    Turbo,
}

impl ChatModel {
    pub fn model_name(&self) -> &'static str {
        match self {
            ChatModel::Standard => "gpt-4",
            ChatModel::Turbo => "gpt-3.5-turbo",
        }
    }
}

/// Body of `POST /generate-image`
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePrompt {
    pub prompt: String,
}

/// Response of `POST /generate-image`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// Base64-encoded PNG
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_names() {
        assert_eq!(ChatModel::Standard.model_name(), "gpt-4");
        assert_eq!(ChatModel::Turbo.model_name(), "gpt-3.5-turbo");
        assert_eq!(ChatModel::default(), ChatModel::Standard);
    }

    #[test]
    fn test_chat_message_keeps_unknown_fields() {
        let raw = json!({
            "role": "assistant",
            "content": null,
            "refusal": null,
            "tool_calls": [{ "id": "call_1" }]
        });

        let message: ChatMessage = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(message.role, "assistant");
        assert!(message.extra.contains_key("tool_calls"));
        assert_eq!(serde_json::to_value(&message).unwrap(), raw);
    }

    #[test]
    fn test_chat_message_missing_content_defaults_to_null() {
        let message: ChatMessage = serde_json::from_value(json!({ "role": "user" })).unwrap();
        assert!(message.content.is_null());
    }
}
