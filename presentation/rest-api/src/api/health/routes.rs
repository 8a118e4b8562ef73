use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
}

/// Health API for liveness checks.
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }

    fn healthy() -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
        })
    }
}

#[OpenApi]
impl Api {
    /// Root liveness check
    ///
    /// Always returns `{"status": "healthy"}`. No dependencies are touched.
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<HealthCheckResponse> {
        Self::healthy()
    }

    /// Health check endpoint
    ///
    /// Same answer as `/`, for load balancers and container probes that
    /// expect a dedicated path.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Self::healthy()
    }
}
