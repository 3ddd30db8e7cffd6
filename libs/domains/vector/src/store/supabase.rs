use async_trait::async_trait;
use core_config::{ConfigError, FromEnv};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use tracing::{debug, error};

use super::VectorStore;
use crate::config::SupabaseConfig;
use crate::error::{VectorError, VectorResult};
use crate::models::{
    CHUNKS_TABLE, EmbeddedChunk, EmbeddedMovie, MOVIES_TABLE, MatchFunction, MatchParams,
    MatchRecord,
};

/// Supabase (PostgREST) implementation of [`VectorStore`]
pub struct SupabaseStore {
    client: Client,
    config: SupabaseConfig,
}

#[derive(Debug, Serialize)]
struct MatchRpcRequest<'a> {
    query_embedding: &'a [f32],
    match_threshold: f32,
    match_count: u32,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(SupabaseConfig::from_env()?))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
    }

    async fn insert<T: Serialize + Sync>(&self, table: &str, rows: &[T]) -> VectorResult<usize> {
        let response = self
            .authorized(self.client.post(self.config.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|e| VectorError::Store(format!("insert into {} failed: {}", table, e)))?;

        check_status(response, |status, body| {
            VectorError::Store(format!(
                "insert into {} failed ({}): {}",
                table, status, body
            ))
        })
        .await?;

        debug!(table, rows = rows.len(), "Inserted rows");
        Ok(rows.len())
    }
}

/// Turns a non-2xx response into the error built by `to_error`.
async fn check_status<F>(response: Response, to_error: F) -> VectorResult<Response>
where
    F: FnOnce(reqwest::StatusCode, &str) -> VectorError,
{
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    let err = to_error(status, error_text.trim());
    error!(%status, error = %err, "Supabase request failed");
    Err(err)
}

#[async_trait]
impl VectorStore for SupabaseStore {
    async fn insert_chunks(&self, rows: &[EmbeddedChunk]) -> VectorResult<usize> {
        self.insert(CHUNKS_TABLE, rows).await
    }

    async fn insert_movies(&self, rows: &[EmbeddedMovie]) -> VectorResult<usize> {
        self.insert(MOVIES_TABLE, rows).await
    }

    async fn match_rows(
        &self,
        function: MatchFunction,
        query_embedding: &[f32],
        params: MatchParams,
    ) -> VectorResult<Vec<MatchRecord>> {
        let rpc = function.rpc_name();
        let body = MatchRpcRequest {
            query_embedding,
            match_threshold: params.threshold,
            match_count: params.count,
        };

        let response = self
            .authorized(self.client.post(self.config.rpc_url(rpc)))
            .json(&body)
            .send()
            .await
            .map_err(|e| VectorError::Search(format!("{}: {}", rpc, e)))?;

        let response = check_status(response, |status, body| {
            VectorError::Search(format!("{} ({}): {}", rpc, status, body))
        })
        .await?;

        let rows: Option<Vec<MatchRecord>> = response
            .json()
            .await
            .map_err(|e| VectorError::Search(format!("{} returned an unreadable body: {}", rpc, e)))?;

        let rows = rows.unwrap_or_default();
        debug!(rpc, rows = rows.len(), "Similarity search completed");
        Ok(rows)
    }
}
