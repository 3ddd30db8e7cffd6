//! # Axum Helpers
//!
//! Shared HTTP plumbing for the worker and its domain routers.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly, server start-up, graceful shutdown
//! - **[`http`]**: CORS layer
//! - **[`errors`]**: `AppError` and the `{ "error": ... }` envelope
//! - **[`extractors`]**: `JsonBody` and `QueryParams`, extractors rejecting with `AppError`
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let router = create_router(Router::new()); // Add your routes
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{create_app, create_router, shutdown_signal};

// Re-export HTTP middleware
pub use http::create_cors_layer;

// Re-export error types
pub use errors::handlers::{method_not_allowed, not_found};
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, QueryParams};
