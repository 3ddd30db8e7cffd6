use axum::{Json, extract::State};
use axum_helpers::JsonBody;
use std::sync::Arc;

use crate::error::LlmResult;
use crate::models::{GeneratedImage, ImagePrompt};
use crate::service::LlmService;

/// `POST /generate-image`: `{prompt}` in, `{image}` (base64) out
pub async fn generate_image(
    State(service): State<Arc<LlmService>>,
    JsonBody(body): JsonBody<ImagePrompt>,
) -> LlmResult<Json<GeneratedImage>> {
    let image = service.generate_image(&body.prompt).await?;
    Ok(Json(GeneratedImage { image }))
}
