use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeRequest;

pub struct ExtractRecipeParams {
    pub request: RecipeRequest,
}

#[async_trait]
pub trait ExtractRecipeUseCase: Send + Sync {
    /// Returns the recipe text, or an error when the URL is missing, the
    /// upstream fails, or the page holds no recipe.
    async fn execute(&self, params: ExtractRecipeParams) -> Result<String, RecipeError>;
}
