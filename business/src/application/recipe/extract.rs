use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeResult;
use crate::domain::recipe::services::RecipeExtractorService;
use crate::domain::recipe::use_cases::extract::{ExtractRecipeParams, ExtractRecipeUseCase};

pub struct ExtractRecipeUseCaseImpl {
    pub extractor: Arc<dyn RecipeExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExtractRecipeUseCase for ExtractRecipeUseCaseImpl {
    async fn execute(&self, params: ExtractRecipeParams) -> Result<String, RecipeError> {
        if !params.request.is_valid() {
            self.logger.error("Missing URL in request");
            return Err(RecipeError::MissingInput);
        }

        let url = params.request.url.trim();
        self.logger.info(&format!("Processing recipe URL: {}", url));

        match self.extractor.extract(url).await {
            Ok(RecipeResult::Recipe { text }) => {
                self.logger.info(&format!(
                    "Recipe extracted from {} ({} chars)",
                    url,
                    text.chars().count()
                ));
                Ok(text)
            }
            Ok(RecipeResult::NoRecipeFound { message }) => {
                self.logger
                    .warn(&format!("No valid recipe found at {}: {}", url, message));
                Err(RecipeError::NoRecipeFound(message))
            }
            Err(err) => {
                self.logger
                    .error(&format!("Recipe extraction failed for {}: {}", url, err));
                Err(err)
            }
        }
    }
}
