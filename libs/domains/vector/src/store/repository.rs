use async_trait::async_trait;

use crate::error::VectorResult;
use crate::models::{EmbeddedChunk, EmbeddedMovie, MatchFunction, MatchParams, MatchRecord};

/// Storage seam for embedded rows and similarity search.
///
/// Implementations can be swapped out for testing or a different backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Bulk insert into the chunks table. Returns the number of rows sent.
    async fn insert_chunks(&self, rows: &[EmbeddedChunk]) -> VectorResult<usize>;

    /// Bulk insert into the movie details table. Returns the number of rows sent.
    async fn insert_movies(&self, rows: &[EmbeddedMovie]) -> VectorResult<usize>;

    /// Run a similarity RPC. No rows is `Ok(vec![])`, never an error.
    async fn match_rows(
        &self,
        function: MatchFunction,
        query_embedding: &[f32],
        params: MatchParams,
    ) -> VectorResult<Vec<MatchRecord>>;
}
