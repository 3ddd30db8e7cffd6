use core_config::{ConfigError, FromEnv, env_or_default, env_required};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Credentials and base URL for the OpenAI-compatible API.
///
/// `base_url` may point at a gateway that proxies OpenAI; request paths
/// (`/chat/completions`, `/embeddings`, ...) are appended to it.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OpenAIConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Full URL for an API path such as `"/embeddings"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl FromEnv for OpenAIConfig {
    /// Reads `OPENAI_API_KEY` (required) and `API_BASE_URL_GATEWAY`.
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_required("OPENAI_API_KEY")?;
        let base_url = env_or_default("API_BASE_URL_GATEWAY", DEFAULT_OPENAI_BASE_URL);

        Ok(Self { api_key, base_url })
    }
}
