use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::recipe::use_cases::extract::{ExtractRecipeParams, ExtractRecipeUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{RecipeResponse, RecipeUrlRequest};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    extract_use_case: Arc<dyn ExtractRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(extract_use_case: Arc<dyn ExtractRecipeUseCase>) -> Self {
        Self { extract_use_case }
    }
}

/// Recipe API
///
/// Extracts a structured recipe from any web page through the Perplexity API.
#[OpenApi]
impl RecipeApi {
    /// Extract a recipe
    ///
    /// Sends the URL to the model with a fixed formatting prompt and returns
    /// the formatted recipe text unchanged.
    ///
    /// ## Errors
    /// - 400: `url` missing or blank, body unreadable, or no recipe on the page
    /// - 500: API key not configured, upstream unreachable or malformed answer
    /// - any other status: passed through from the Perplexity API, with its
    ///   body in `details`
    #[oai(path = "/api/recipe", method = "post", tag = "ApiTags::Recipes")]
    async fn extract_recipe(&self, body: Json<RecipeUrlRequest>) -> ExtractRecipeResponse {
        let params = ExtractRecipeParams {
            request: body.0.into(),
        };

        match self.extract_use_case.execute(params).await {
            Ok(recipe) => ExtractRecipeResponse::Ok(Json(RecipeResponse { recipe })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status {
                    StatusCode::BAD_REQUEST => ExtractRecipeResponse::BadRequest(json),
                    StatusCode::INTERNAL_SERVER_ERROR => {
                        ExtractRecipeResponse::InternalError(json)
                    }
                    _ => ExtractRecipeResponse::Upstream(status, json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "recipe_bad_request")]
pub enum ExtractRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    /// Status and error passed through from the Perplexity API
    Upstream(StatusCode, Json<ErrorResponse>),
}

fn recipe_bad_request(err: poem::Error) -> ExtractRecipeResponse {
    ExtractRecipeResponse::BadRequest(Json(ErrorResponse::new(format!(
        "Invalid request body: {}",
        err
    ))))
}
