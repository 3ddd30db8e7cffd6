//! Embedding handlers

use axum::{Json, extract::State};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::{VectorError, VectorResult};
use crate::models::{
    EmbedChunksRequest, EmbedChunksResponse, EmbedMoviesResponse, EmbedTextRequest, MovieInput,
    SingleEmbedding,
};
use crate::service::VectorService;
use crate::store::VectorStore;

/// `POST /handle-embedding`: `{input}` in, `{content, embedding}` out. Nothing is stored.
pub async fn handle_embedding<S: VectorStore>(
    State(service): State<Arc<VectorService<S>>>,
    JsonBody(request): JsonBody<EmbedTextRequest>,
) -> VectorResult<Json<SingleEmbedding>> {
    let input = request.input.unwrap_or_default();
    let result = service.embed_text(&input).await?;
    Ok(Json(result))
}

/// `POST /embed-chunks`: batch-embed `{chunks}` into the chunks table
pub async fn embed_chunks<S: VectorStore>(
    State(service): State<Arc<VectorService<S>>>,
    JsonBody(request): JsonBody<EmbedChunksRequest>,
) -> VectorResult<Json<EmbedChunksResponse>> {
    let chunks = request
        .chunks
        .ok_or_else(|| VectorError::Validation("chunks must be an array".to_string()))?;

    let summary = service.embed_chunks(chunks).await?;
    Ok(Json(EmbedChunksResponse {
        total_chunks: summary.total,
        embeddings_created: summary.embeddings_created,
        openai_requests: summary.openai_requests,
        supabase_inserted: summary.store_inserted,
        embeddings: summary.embeddings,
    }))
}

/// `POST /embed-movies`: batch-embed a movie list into the movie details table
pub async fn embed_movies<S: VectorStore>(
    State(service): State<Arc<VectorService<S>>>,
    JsonBody(movies): JsonBody<Vec<MovieInput>>,
) -> VectorResult<Json<EmbedMoviesResponse>> {
    let summary = service.embed_movies(movies).await?;
    Ok(Json(EmbedMoviesResponse {
        total_movies: summary.total,
        embeddings_created: summary.embeddings_created,
        openai_requests: summary.openai_requests,
        supabase_inserted: summary.store_inserted,
        embeddings: summary.embeddings,
    }))
}
