use async_trait::async_trait;

use crate::error::LlmResult;
use crate::models::{ChatMessage, ChatModel};

/// Trait for chat and image generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Run one chat completion and return the first choice's message
    async fn complete_chat(
        &self,
        model: ChatModel,
        messages: Vec<ChatMessage>,
    ) -> LlmResult<ChatMessage>;

    /// Generate one square image and return it base64-encoded
    async fn generate_image(&self, prompt: &str) -> LlmResult<String>;
}
