use async_trait::async_trait;

use crate::error::VectorResult;

/// Trait for embedding generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate the embedding for a single text
    async fn embed(&self, text: &str) -> VectorResult<Vec<f32>>;

    /// Generate embeddings for several texts in one provider call.
    ///
    /// Vectors come back in input order. The provider does not pad or trim
    /// the result, so callers must check the count themselves.
    async fn embed_batch(&self, texts: &[String]) -> VectorResult<Vec<Vec<f32>>>;
}
