use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::TopRatedPage;

/// Read-only movie catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page of the top-rated listing; `page` is passed through unparsed
    async fn top_rated(&self, page: &str) -> CatalogResult<TopRatedPage>;

    /// Full poster URL for a movie.
    ///
    /// Returns `Ok(None)` when the movie does not exist or has no poster.
    async fn poster_url(&self, movie_id: i64) -> CatalogResult<Option<String>>;
}
