//! Vector Domain Library
//!
//! Embedding generation, the Supabase-backed vector store, the batch
//! embedding pipeline and the similarity matching flow.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │              VectorService               │  ← filtering, insert, enrichment
//! └──────┬──────────────┬──────────────┬─────┘
//!        │              │              │
//! ┌──────▼──────┐ ┌─────▼──────┐ ┌─────▼──────┐
//! │BatchPipeline│ │VectorStore │ │MovieCatalog│
//! │  + Pacer    │ │  (trait)   │ │  (trait)   │
//! └──────┬──────┘ └─────┬──────┘ └────────────┘
//!        │              │
//! ┌──────▼───────────┐ ┌▼──────────────┐
//! │EmbeddingProvider │ │ SupabaseStore │
//! │ (OpenAIEmbedder) │ └───────────────┘
//! └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::TmdbClient;
//! use domain_vector::{ChunkInput, OpenAIEmbedder, SupabaseStore, VectorService};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = VectorService::new(
//!     SupabaseStore::from_env()?,
//!     Arc::new(OpenAIEmbedder::from_env()?),
//!     Arc::new(TmdbClient::from_env()?),
//! );
//!
//! let summary = service
//!     .embed_chunks(vec![ChunkInput::from_content("A heist film set in Rome.")])
//!     .await?;
//! println!("{} embeddings stored", summary.store_inserted);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod embedding;
pub mod error;
pub mod handlers;
pub mod matching;
pub mod models;
pub mod pipeline;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_support;

pub use config::{BatchConfig, SupabaseConfig};
pub use embedding::{EMBEDDING_MODEL, EmbeddingProvider, OpenAIEmbedder};
pub use error::{VectorError, VectorResult};
pub use models::{
    ChunkInput, EmbeddedChunk, EmbeddedMovie, EnrichedMatch, MatchFunction, MatchParams,
    MatchRecord, MovieInput, TextChunk,
};
pub use pipeline::{BatchOutcome, BatchPacer, BatchPipeline, BatchReport, FixedDelay, NoDelay};
pub use service::{PipelineSummary, VectorService};
pub use store::{SupabaseStore, VectorStore};
