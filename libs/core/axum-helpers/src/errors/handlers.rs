use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback for paths no route matches.
///
/// Answers with a plain-text 404 whatever the method or body.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Fallback for a known path hit with the wrong method.
///
/// Attach with `post(handler).fallback(method_not_allowed)`.
pub async fn method_not_allowed(method: Method) -> Response {
    AppError::MethodNotAllowed(method).into_response()
}
