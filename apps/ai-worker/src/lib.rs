//! AI Worker
//!
//! HTTP edge worker in front of OpenAI, a Supabase vector store and TMDB.
//!
//! ## Modules
//!
//! - `api`: route table merging the domain routers
//! - `config`: environment-driven configuration
//! - `state`: service wiring

pub mod api;
pub mod config;
pub mod state;

pub use config::Config;
pub use state::AppState;

use axum::Router;
use domain_vector::VectorStore;

/// Full application: domain routes plus 404 fallback, tracing and CORS
pub fn app<S: VectorStore + 'static>(state: AppState<S>) -> Router {
    axum_helpers::create_router(api::routes(state))
}
