use super::{cors_config, perplexity_config::PerplexityConfig, server_config::ServerConfig};
use poem::middleware::Cors;

/// Process-wide configuration, read once at startup and handed to the wiring code.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub perplexity: PerplexityConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            perplexity: PerplexityConfig::from_env()?,
        })
    }
}
