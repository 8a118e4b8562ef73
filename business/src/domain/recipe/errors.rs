/// Errors raised while extracting a recipe.
///
/// Display strings are the messages returned to the caller, so they must
/// never contain the credential.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    #[error("URL is required")]
    MissingInput,
    #[error("API key not configured")]
    Configuration,
    #[error("Failed to connect to Perplexity API: {0}")]
    Transport(String),
    #[error("Error from Perplexity API (Status {status})")]
    Upstream { status: u16, body: String },
    #[error("Malformed response from Perplexity API: {0}")]
    MalformedResponse(String),
    #[error("{0}")]
    NoRecipeFound(String),
}
