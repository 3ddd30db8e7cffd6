use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, instrument};

use crate::completion::LlmProvider;
use crate::error::{LlmError, LlmResult};
use crate::models::{ChatMessage, ChatModel};

/// Chat and image operations on top of an [`LlmProvider`]
#[derive(Clone)]
pub struct LlmService {
    provider: Arc<dyn LlmProvider>,
}

impl LlmService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Run one chat completion with the given model profile
    #[instrument(skip(self, messages), fields(model = model.model_name(), messages = messages.len()))]
    pub async fn chat(&self, model: ChatModel, messages: Vec<ChatMessage>) -> LlmResult<ChatMessage> {
        if messages.is_empty() {
            return Err(LlmError::Validation(
                "messages must be a non-empty array".to_string(),
            ));
        }

        self.provider.complete_chat(model, messages).await
    }

    /// Run one standard chat completion per conversation, all concurrently.
    ///
    /// Waits for every call to settle and returns the replies in input order.
    /// The first failure (in input order) fails the whole batch.
    #[instrument(skip(self, conversations), fields(conversations = conversations.len()))]
    pub async fn multi_chat(
        &self,
        conversations: Vec<Vec<ChatMessage>>,
    ) -> LlmResult<Vec<ChatMessage>> {
        let calls = conversations
            .into_iter()
            .map(|messages| self.chat(ChatModel::Standard, messages));

        let replies = join_all(calls)
            .await
            .into_iter()
            .collect::<LlmResult<Vec<_>>>()?;

        info!(replies = replies.len(), "Multi-chat completed");
        Ok(replies)
    }

    /// Generate one image for `prompt`, returned as base64
    #[instrument(skip(self, prompt))]
    pub async fn generate_image(&self, prompt: &str) -> LlmResult<String> {
        if prompt.trim().is_empty() {
            return Err(LlmError::Validation("prompt must not be empty".to_string()));
        }

        self.provider.generate_image(prompt).await
    }
}
