//! Custom extractors for Axum handlers.
//!
//! Extractors here reject with [`crate::AppError`] so failures share the
//! standard error envelope.

pub mod json_body;
pub mod query_params;

pub use json_body::JsonBody;
pub use query_params::QueryParams;
