/// Literal the model is told to start its answer with when a page holds no recipe.
pub const NO_RECIPE_SENTINEL: &str = "NO_VALID_RECIPE:";

/// Inbound request to extract a recipe from a web page.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeRequest {
    pub url: String,
}

impl RecipeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// A request is usable as long as the URL is not blank. Well-formedness is
    /// left to the upstream model.
    pub fn is_valid(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

/// Outcome of asking the model for a recipe.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeResult {
    /// Formatted recipe text, exactly as the model returned it.
    Recipe { text: String },
    /// The model reported that the page holds no usable recipe.
    NoRecipeFound { message: String },
}

impl RecipeResult {
    /// Classifies raw model output by looking for the sentinel prefix.
    pub fn from_content(content: &str) -> Self {
        match content.strip_prefix(NO_RECIPE_SENTINEL) {
            Some(reason) => RecipeResult::NoRecipeFound {
                message: reason.trim().to_string(),
            },
            None => RecipeResult::Recipe {
                text: content.to_string(),
            },
        }
    }
}
