use async_trait::async_trait;
use domain_catalog::{CatalogResult, MovieCatalog, TopRatedPage};

mockall::mock! {
    pub Catalog {}

    #[async_trait]
    impl MovieCatalog for Catalog {
        async fn top_rated(&self, page: &str) -> CatalogResult<TopRatedPage>;
        async fn poster_url(&self, movie_id: i64) -> CatalogResult<Option<String>>;
    }
}
