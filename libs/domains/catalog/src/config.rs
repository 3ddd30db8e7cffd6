use core_config::{ConfigError, FromEnv, env_or_default, env_required};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// TMDB API configuration
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    /// v4 read access token, sent as a bearer token
    pub api_token: String,
    pub base_url: String,
    /// Prefix joined with a movie's `poster_path`
    pub image_base_url: String,
}

impl TmdbConfig {
    pub fn new(api_token: String) -> Self {
        Self {
            api_token,
            base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            image_base_url: DEFAULT_TMDB_IMAGE_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn poster_url(&self, poster_path: &str) -> String {
        format!("{}{}", self.image_base_url.trim_end_matches('/'), poster_path)
    }
}

impl FromEnv for TmdbConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_token = env_required("TMDB_API_TOKEN")?;
        let base_url = env_or_default("TMDB_BASE_URL", DEFAULT_TMDB_BASE_URL);

        Ok(Self::new(api_token).with_base_url(base_url))
    }
}
