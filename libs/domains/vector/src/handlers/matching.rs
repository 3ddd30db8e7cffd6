//! Similarity matching handlers

use axum::{Json, extract::State};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::VectorResult;
use crate::matching::query_embedding;
use crate::models::{MatchObjectResponse, MatchRequest, MatchTextResponse};
use crate::service::VectorService;
use crate::store::VectorStore;

/// `POST /handle-matching`: matched chunk contents as one string
pub async fn handle_matching<S: VectorStore>(
    State(service): State<Arc<VectorService<S>>>,
    JsonBody(request): JsonBody<MatchRequest>,
) -> VectorResult<Json<MatchTextResponse>> {
    let embedding = query_embedding(&request)?;
    let result = service.match_text(&embedding).await?;
    Ok(Json(MatchTextResponse { result }))
}

/// `POST /handle-matching-object`: matched movie rows, each with `posterUrl`
pub async fn handle_matching_object<S: VectorStore>(
    State(service): State<Arc<VectorService<S>>>,
    JsonBody(request): JsonBody<MatchRequest>,
) -> VectorResult<Json<MatchObjectResponse>> {
    let embedding = query_embedding(&request)?;
    let result = service.match_objects(&embedding).await?;
    Ok(Json(MatchObjectResponse { result }))
}
