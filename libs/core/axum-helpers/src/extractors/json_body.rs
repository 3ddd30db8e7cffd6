//! JSON body extractor that ignores `Content-Type` and rejects with `AppError`.

use crate::errors::AppError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// Deserializes the request body as JSON.
///
/// Unlike `axum::Json`, the body is parsed whatever `Content-Type` the client
/// sent, and a malformed body is reported as a 500 `{ "error": ... }`.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// #[derive(serde::Deserialize)]
/// struct Prompt {
///     prompt: String,
/// }
///
/// async fn handler(JsonBody(payload): JsonBody<Prompt>) -> String {
///     payload.prompt
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(data))
    }
}
