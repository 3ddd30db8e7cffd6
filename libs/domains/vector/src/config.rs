use std::num::NonZeroUsize;
use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_parse_or, env_required};

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;

/// Supabase project URL and service key
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub api_key: String,
}

impl SupabaseConfig {
    pub fn new(url: String, api_key: String) -> Self {
        Self { url, api_key }
    }

    /// PostgREST URL for a table
    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table)
    }

    /// PostgREST URL for a stored procedure
    pub(crate) fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.url.trim_end_matches('/'), function)
    }
}

impl FromEnv for SupabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("SUPABASE_URL")?,
            api_key: env_required("SUPABASE_API_KEY")?,
        })
    }
}

/// Slice size and inter-batch pause for the embedding pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    pub batch_size: NonZeroUsize,
    pub delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN),
            delay: Duration::from_millis(DEFAULT_BATCH_DELAY_MS),
        }
    }
}

impl FromEnv for BatchConfig {
    /// Reads `EMBED_BATCH_SIZE` and `EMBED_BATCH_DELAY_MS`.
    fn from_env() -> Result<Self, ConfigError> {
        let size = env_parse_or("EMBED_BATCH_SIZE", DEFAULT_BATCH_SIZE)?;
        let batch_size = NonZeroUsize::new(size).ok_or_else(|| ConfigError::InvalidValue {
            key: "EMBED_BATCH_SIZE".to_string(),
            details: "batch size must be greater than zero".to_string(),
        })?;
        let delay_ms = env_parse_or("EMBED_BATCH_DELAY_MS", DEFAULT_BATCH_DELAY_MS)?;

        Ok(Self {
            batch_size,
            delay: Duration::from_millis(delay_ms),
        })
    }
}
