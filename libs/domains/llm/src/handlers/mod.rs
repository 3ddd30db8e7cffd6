mod chat;
mod image;

use axum::{Router, routing::post};
use axum_helpers::method_not_allowed;
use std::sync::Arc;

use crate::service::LlmService;

/// Create router for chat and image endpoints
pub fn router(service: LlmService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/chat", post(chat::chat).fallback(method_not_allowed))
        .route(
            "/chat-turbo",
            post(chat::chat_turbo).fallback(method_not_allowed),
        )
        .route(
            "/multiple-chat",
            post(chat::multiple_chat).fallback(method_not_allowed),
        )
        .route(
            "/generate-image",
            post(image::generate_image).fallback(method_not_allowed),
        )
        .with_state(shared_service)
}
