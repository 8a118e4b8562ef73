#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectivityError {
    #[error("API key not configured")]
    Configuration,
    #[error("Failed to connect to Perplexity API: {0}")]
    Transport(String),
}
