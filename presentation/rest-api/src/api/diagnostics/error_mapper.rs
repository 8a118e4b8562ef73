use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::diagnostics::errors::DiagnosticsError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DiagnosticsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(self.to_string())),
        )
    }
}
