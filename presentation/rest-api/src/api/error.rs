use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    /// Upstream payload, when the failure came from the Perplexity API.
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Status to answer with when relaying an upstream failure.
///
/// Statuses that cannot carry a body (1xx, 204, 205, 304) and codes outside the
/// valid range become 502, so the error body always reaches the caller.
pub fn passthrough_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code)
            if !code.is_informational()
                && code != StatusCode::NO_CONTENT
                && code != StatusCode::RESET_CONTENT
                && code != StatusCode::NOT_MODIFIED =>
        {
            code
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Upstream bodies are surfaced as JSON when they parse, as text otherwise.
pub fn body_as_json(body: &str) -> serde_json::Value {
    if body.trim().is_empty() {
        return serde_json::Value::String("No error details available".to_string());
    }
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
}
