//! Services shared by the request handlers.

use std::sync::Arc;

use domain_catalog::{CatalogService, MovieCatalog, TmdbClient};
use domain_llm::{LlmProvider, LlmService, OpenAIProvider};
use domain_vector::{
    BatchConfig, EmbeddingProvider, OpenAIEmbedder, SupabaseStore, VectorService, VectorStore,
};

use crate::config::Config;

/// One configured service per domain.
///
/// Generic over the vector store so tests can run the full router without
/// a Supabase project.
pub struct AppState<S: VectorStore> {
    pub llm: LlmService,
    pub catalog: CatalogService,
    pub vector: VectorService<S>,
}

impl<S: VectorStore> AppState<S> {
    /// Wire services from already-built collaborators
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        embedder: Arc<dyn EmbeddingProvider>,
        store: S,
        catalog: Arc<dyn MovieCatalog>,
        batch: BatchConfig,
    ) -> Self {
        Self {
            llm: LlmService::new(llm),
            vector: VectorService::with_batch_config(store, embedder, catalog.clone(), batch),
            catalog: CatalogService::new(catalog),
        }
    }
}

impl AppState<SupabaseStore> {
    /// Production wiring: OpenAI, Supabase and TMDB over HTTP
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(OpenAIProvider::new(config.openai.clone())),
            Arc::new(OpenAIEmbedder::new(config.openai.clone())),
            SupabaseStore::new(config.supabase.clone()),
            Arc::new(TmdbClient::new(config.tmdb.clone())),
            config.batch,
        )
    }
}
