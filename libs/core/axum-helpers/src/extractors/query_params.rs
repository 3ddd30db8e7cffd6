//! Query string extractor that rejects with `AppError`.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Deserializes the query string like `axum::extract::Query`, but a query
/// that does not fit `T` is reported through the standard error envelope.
///
/// # Example
/// ```ignore
/// use axum_helpers::QueryParams;
///
/// #[derive(serde::Deserialize)]
/// struct Paging {
///     page: Option<String>,
/// }
///
/// async fn handler(QueryParams(paging): QueryParams<Paging>) -> String {
///     paging.page.unwrap_or_default()
/// }
/// ```
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::try_from_uri(&parts.uri)?;
        Ok(QueryParams(value))
    }
}
