//! HTTP middleware module.
//!
//! ```ignore
//! use axum_helpers::http::create_cors_layer;
//!
//! let app = Router::new().layer(create_cors_layer());
//! ```

pub mod cors;

pub use cors::{CORS_ALLOWED_HEADERS, CORS_ALLOWED_METHODS, create_cors_layer};
