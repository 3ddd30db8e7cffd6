use core_config::{FromEnv, server::ServerConfig};
use domain_catalog::TmdbConfig;
use domain_llm::OpenAIConfig;
use domain_vector::{BatchConfig, SupabaseConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes the provider configs of every domain crate
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub openai: OpenAIConfig,
    pub supabase: SupabaseConfig,
    pub tmdb: TmdbConfig,
    pub batch: BatchConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?, // HOST=0.0.0.0, PORT=8080 unless set
            openai: OpenAIConfig::from_env()?,
            supabase: SupabaseConfig::from_env()?,
            tmdb: TmdbConfig::from_env()?,
            batch: BatchConfig::from_env()?,
        })
    }
}
