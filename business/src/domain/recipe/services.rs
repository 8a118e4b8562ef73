use async_trait::async_trait;

use super::errors::RecipeError;
use super::model::RecipeResult;

/// Service port for turning a recipe URL into formatted recipe text.
///
/// Implementations make exactly one upstream call per invocation and never retry.
#[async_trait]
pub trait RecipeExtractorService: Send + Sync {
    async fn extract(&self, url: &str) -> Result<RecipeResult, RecipeError>;
}
