//! Route table of the worker.

use axum::{Router, routing::any};
use domain_vector::VectorStore;

use crate::state::AppState;

pub const ANOTHER_ENDPOINT_BODY: &str = "This is another endpoint";

/// Merge every domain router plus the placeholder endpoint.
pub fn routes<S: VectorStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/another-endpoint", any(another_endpoint))
        .merge(domain_llm::handlers::router(state.llm))
        .merge(domain_vector::handlers::router(state.vector))
        .merge(domain_catalog::handlers::router(state.catalog))
}

/// Any method, any body: fixed text
async fn another_endpoint() -> &'static str {
    ANOTHER_ENDPOINT_BODY
}
