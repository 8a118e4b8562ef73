use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, body_as_json, passthrough_status};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            RecipeError::MissingInput | RecipeError::NoRecipeFound(_) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
            }
            RecipeError::Configuration
            | RecipeError::Transport(_)
            | RecipeError::MalformedResponse(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            ),
            RecipeError::Upstream { status, body } => (
                passthrough_status(status),
                Json(ErrorResponse {
                    error: message,
                    details: Some(body_as_json(&body)),
                }),
            ),
        }
    }
}
