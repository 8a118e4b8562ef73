use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct ProbeSuccessResponse {
    pub status: String,
    pub message: String,
    /// Upstream answer, as JSON when it parses
    pub response: serde_json::Value,
}

impl ProbeSuccessResponse {
    pub fn new(response: serde_json::Value) -> Self {
        Self {
            status: "success".to_string(),
            message: "API connection working".to_string(),
            response,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProbeFailureResponse {
    pub status: String,
    /// Upstream error body
    pub message: serde_json::Value,
}

impl ProbeFailureResponse {
    pub fn new(message: serde_json::Value) -> Self {
        Self {
            status: "error".to_string(),
            message,
        }
    }
}
