//! Chat completion handlers

use axum::{Json, extract::State};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::LlmResult;
use crate::models::{ChatMessage, ChatModel};
use crate::service::LlmService;

/// `POST /chat`: message list in, first reply message out
pub async fn chat(
    State(service): State<Arc<LlmService>>,
    JsonBody(messages): JsonBody<Vec<ChatMessage>>,
) -> LlmResult<Json<ChatMessage>> {
    let reply = service.chat(ChatModel::Standard, messages).await?;
    Ok(Json(reply))
}

/// `POST /chat-turbo`: same as `/chat` with the turbo model
pub async fn chat_turbo(
    State(service): State<Arc<LlmService>>,
    JsonBody(messages): JsonBody<Vec<ChatMessage>>,
) -> LlmResult<Json<ChatMessage>> {
    let reply = service.chat(ChatModel::Turbo, messages).await?;
    Ok(Json(reply))
}

/// `POST /multiple-chat`: list of conversations in, one reply per conversation out
pub async fn multiple_chat(
    State(service): State<Arc<LlmService>>,
    JsonBody(conversations): JsonBody<Vec<Vec<ChatMessage>>>,
) -> LlmResult<Json<Vec<ChatMessage>>> {
    let replies = service.multi_chat(conversations).await?;
    Ok(Json(replies))
}
