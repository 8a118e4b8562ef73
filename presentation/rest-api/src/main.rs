use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration once, wires the Perplexity adapters into the use cases
/// and starts the HTTP server.
///
/// - config/: Application configuration (server, CORS, Perplexity)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables, so RUST_LOG may come from .env
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    if config.perplexity.api_key.is_none() {
        tracing::warn!(
            "{} is not set; recipe extraction will fail until it is configured",
            config.perplexity.credential_var
        );
    }

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.perplexity);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
