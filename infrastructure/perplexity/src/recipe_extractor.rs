use std::time::Duration;

use async_trait::async_trait;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::RecipeResult;
use business::domain::recipe::services::RecipeExtractorService;

use crate::client::{PerplexityClient, truncate_for_log};
use crate::prompt::{PromptVersion, build_prompt};
use crate::response_mapper::map_response;

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RecipeExtractorPerplexity {
    client: PerplexityClient,
    prompt_version: PromptVersion,
    timeout: Duration,
}

impl RecipeExtractorPerplexity {
    pub fn new(client: PerplexityClient, prompt_version: PromptVersion, timeout: Duration) -> Self {
        Self {
            client,
            prompt_version,
            timeout,
        }
    }
}

#[async_trait]
impl RecipeExtractorService for RecipeExtractorPerplexity {
    async fn extract(&self, url: &str) -> Result<RecipeResult, RecipeError> {
        if !self.client.has_credential() {
            return Err(RecipeError::Configuration);
        }

        let request = build_prompt(url, &self.client.model, self.prompt_version);
        let response = self.client.send(&request, self.timeout).await?;

        if response.status_code != 200 {
            tracing::error!(
                status = response.status_code,
                body = %truncate_for_log(&response.body),
                "Perplexity API error"
            );
        }

        map_response(&response)
    }
}
