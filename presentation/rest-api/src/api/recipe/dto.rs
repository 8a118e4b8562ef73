use poem_openapi::Object;

use business::domain::recipe::model::RecipeRequest;

#[derive(Debug, Clone, Object)]
pub struct RecipeUrlRequest {
    /// Address of the page holding the recipe
    ///
    /// Optional in the schema so that a missing value is answered with the
    /// service's own error body.
    pub url: Option<String>,
}

impl From<RecipeUrlRequest> for RecipeRequest {
    fn from(dto: RecipeUrlRequest) -> Self {
        RecipeRequest::new(dto.url.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Formatted recipe text as produced by the model
    pub recipe: String,
}
