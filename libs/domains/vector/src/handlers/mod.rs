mod embedding;
mod matching;

use axum::{Router, routing::post};
use axum_helpers::method_not_allowed;
use std::sync::Arc;

use crate::service::VectorService;
use crate::store::VectorStore;

/// Create router for the embedding and matching endpoints
pub fn router<S: VectorStore + 'static>(service: VectorService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/handle-embedding",
            post(embedding::handle_embedding).fallback(method_not_allowed),
        )
        .route(
            "/embed-chunks",
            post(embedding::embed_chunks).fallback(method_not_allowed),
        )
        .route(
            "/embed-movies",
            post(embedding::embed_movies).fallback(method_not_allowed),
        )
        .route(
            "/handle-matching",
            post(matching::handle_matching).fallback(method_not_allowed),
        )
        .route(
            "/handle-matching-object",
            post(matching::handle_matching_object).fallback(method_not_allowed),
        )
        .with_state(shared_service)
}
