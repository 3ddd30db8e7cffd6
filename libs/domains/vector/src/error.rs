use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VectorError {
    #[error("{0}")]
    Validation(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Vector store error: {0}")]
    Store(String),

    #[error("Similarity search failed: {0}")]
    Search(String),

    /// Fatal failure after the pipeline already talked to the embedding
    /// provider; carries how many provider requests were made.
    #[error("Embedding pipeline failed after {request_count} provider requests: {source}")]
    Pipeline {
        #[source]
        source: Box<VectorError>,
        request_count: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type VectorResult<T> = Result<T, VectorError>;

impl VectorError {
    pub fn pipeline(source: VectorError, request_count: usize) -> Self {
        VectorError::Pipeline {
            source: Box::new(source),
            request_count,
        }
    }
}

impl From<reqwest::Error> for VectorError {
    fn from(err: reqwest::Error) -> Self {
        VectorError::Embedding(err.to_string())
    }
}

impl From<serde_json::Error> for VectorError {
    fn from(err: serde_json::Error) -> Self {
        VectorError::Internal(format!("JSON error: {}", err))
    }
}

impl From<core_config::ConfigError> for VectorError {
    fn from(err: core_config::ConfigError) -> Self {
        VectorError::Config(err.to_string())
    }
}

/// Convert VectorError to AppError for standardized HTTP error responses
impl From<VectorError> for AppError {
    fn from(err: VectorError) -> Self {
        match err {
            VectorError::Validation(msg) => AppError::InvalidInput(msg),
            VectorError::Embedding(msg) => AppError::Upstream(format!("Embedding error: {}", msg)),
            VectorError::Store(msg) => AppError::Upstream(format!("Vector store error: {}", msg)),
            VectorError::Search(msg) => {
                AppError::Upstream(format!("Similarity search failed: {}", msg))
            }
            VectorError::Pipeline {
                source,
                request_count,
            } => AppError::InternalWithDetails {
                message: source.to_string(),
                details: json!({ "openAIRequests": request_count }),
            },
            VectorError::Config(msg) => {
                AppError::InternalServerError(format!("Config error: {}", msg))
            }
            VectorError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for VectorError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
