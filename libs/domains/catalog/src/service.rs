use std::sync::Arc;

use tracing::instrument;

use crate::client::MovieCatalog;
use crate::error::CatalogResult;
use crate::models::TopRatedMovie;

/// Top-rated listing in the two shapes the worker serves
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn MovieCatalog>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// Shared handle for collaborators that need poster lookups
    pub fn catalog(&self) -> Arc<dyn MovieCatalog> {
        self.catalog.clone()
    }

    #[instrument(skip(self))]
    pub async fn top_rated_flat(&self, page: &str) -> CatalogResult<String> {
        Ok(self.catalog.top_rated(page).await?.flatten())
    }

    #[instrument(skip(self))]
    pub async fn top_rated_formatted(&self, page: &str) -> CatalogResult<Vec<TopRatedMovie>> {
        Ok(self.catalog.top_rated(page).await?.formatted())
    }
}
