use axum::{
    Json, Router,
    extract::State,
    routing::{any, get},
};
use axum_helpers::{QueryParams, method_not_allowed};
use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::{FlattenedMovies, FormattedMovies, PageQuery};
use crate::service::CatalogService;

/// Create router for the top-rated listing endpoints
pub fn router(service: CatalogService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/top-rated-movies",
            get(top_rated_movies).fallback(method_not_allowed),
        )
        .route("/top-rated-movies-formatted", any(top_rated_movies_formatted))
        .with_state(shared_service)
}

/// `GET /top-rated-movies?page=`: listing flattened into one string
pub async fn top_rated_movies(
    State(service): State<Arc<CatalogService>>,
    QueryParams(query): QueryParams<PageQuery>,
) -> CatalogResult<Json<FlattenedMovies>> {
    let movies = service.top_rated_flat(query.page_or_default()).await?;
    Ok(Json(FlattenedMovies { movies }))
}

/// `/top-rated-movies-formatted?page=` (any method): listing as objects
pub async fn top_rated_movies_formatted(
    State(service): State<Arc<CatalogService>>,
    QueryParams(query): QueryParams<PageQuery>,
) -> CatalogResult<Json<FormattedMovies>> {
    let movies = service.top_rated_formatted(query.page_or_default()).await?;
    Ok(Json(FormattedMovies { movies }))
}
