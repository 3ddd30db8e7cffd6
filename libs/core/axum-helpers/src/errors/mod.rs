pub mod handlers;

use axum::{
    Json,
    extract::rejection::{BytesRejection, QueryRejection},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned for every failed request.
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "Embedding pipeline failed: store insert returned 503",
///   "details": { "openAIRequests": 3 }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Optional diagnostic payload (e.g. counters gathered before the failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Client input problems and upstream failures both render as 500; only a
/// wrong method (405) and an unknown resource (404) use other statuses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Invalid JSON body: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Failed to read request body: {0}")]
    BodyRejection(#[from] BytesRejection),

    #[error("Invalid query string: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("{0} Method not allowed")]
    MethodNotAllowed(Method),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{message}")]
    InternalWithDetails {
        message: String,
        details: serde_json::Value,
    },
}

impl AppError {
    /// HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let details = match self {
            AppError::SerdeJson(e) => {
                tracing::warn!(error = %e, "Rejected malformed JSON body");
                None
            }
            AppError::BodyRejection(e) => {
                tracing::warn!(error = %e, "Failed to read request body");
                None
            }
            AppError::QueryRejection(e) => {
                tracing::warn!(error = %e, "Rejected malformed query string");
                None
            }
            AppError::MethodNotAllowed(method) => {
                tracing::info!(%method, "Method not allowed");
                None
            }
            AppError::InvalidInput(msg) => {
                tracing::info!("Invalid input: {}", msg);
                None
            }
            AppError::Upstream(msg) => {
                tracing::error!("Upstream provider error: {}", msg);
                None
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                None
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                None
            }
            AppError::InternalWithDetails { message, details } => {
                tracing::error!(%details, "Internal server error: {}", message);
                Some(details)
            }
        };

        let body = Json(ErrorResponse {
            error: message,
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_method_not_allowed_renders_405_with_method_name() {
        let response = AppError::MethodNotAllowed(Method::GET).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "GET Method not allowed" }));
    }

    #[tokio::test]
    async fn test_upstream_error_renders_500_without_details() {
        let response = AppError::Upstream("OpenAI API error (429)".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "OpenAI API error (429)");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_invalid_input_is_a_500() {
        let response = AppError::InvalidInput("prompt is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_details_are_carried_into_envelope() {
        let response = AppError::InternalWithDetails {
            message: "insert failed".to_string(),
            details: serde_json::json!({ "openAIRequests": 3 }),
        }
        .into_response();

        let body = body_json(response).await;
        assert_eq!(body["error"], "insert failed");
        assert_eq!(body["details"]["openAIRequests"], 3);
    }

    #[tokio::test]
    async fn test_serde_error_message_is_descriptive() {
        let err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }
}
