use async_trait::async_trait;
use core_config::{ConfigError, FromEnv};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::MovieCatalog;
use crate::config::TmdbConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{MovieDetails, TopRatedPage};

/// TMDB v3 client
pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(TmdbConfig::from_env()?))
    }

    fn poster_from_details(&self, movie_id: i64, details: MovieDetails) -> Option<String> {
        match details.poster_path.filter(|path| !path.is_empty()) {
            Some(path) => Some(self.config.poster_url(&path)),
            None => {
                warn!(movie_id, "Movie has no poster_path");
                None
            }
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn top_rated(&self, page: &str) -> CatalogResult<TopRatedPage> {
        let response = self
            .client
            .get(self.config.endpoint("/movie/top_rated"))
            .bearer_auth(&self.config.api_token)
            .query(&[("language", "en-US"), ("page", page)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Provider(format!(
                "TMDB API error ({}): {}",
                status, error_text
            )));
        }

        let listing: TopRatedPage = response.json().await?;
        debug!(page, movies = listing.results.len(), "Fetched top rated movies");
        Ok(listing)
    }

    async fn poster_url(&self, movie_id: i64) -> CatalogResult<Option<String>> {
        let response = self
            .client
            .get(self.config.endpoint(&format!("/movie/{}", movie_id)))
            .bearer_auth(&self.config.api_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            warn!(movie_id, "Movie not found in TMDB");
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Provider(format!(
                "TMDB API error ({}) for movie {}: {}",
                status, movie_id, error_text
            )));
        }

        let details: MovieDetails = response.json().await?;
        Ok(self.poster_from_details(movie_id, details))
    }
}
