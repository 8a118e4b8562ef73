use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::connectivity::use_cases::probe::ProbeUpstreamUseCase;

use crate::api::connectivity::dto::{ProbeFailureResponse, ProbeSuccessResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse, body_as_json, passthrough_status};
use crate::api::tags::ApiTags;

pub struct ConnectivityApi {
    probe_use_case: Arc<dyn ProbeUpstreamUseCase>,
}

impl ConnectivityApi {
    pub fn new(probe_use_case: Arc<dyn ProbeUpstreamUseCase>) -> Self {
        Self { probe_use_case }
    }

    async fn probe(&self) -> ProbeResponse {
        match self.probe_use_case.execute().await {
            Ok(report) if report.is_success() => {
                ProbeResponse::Ok(Json(ProbeSuccessResponse::new(body_as_json(&report.body))))
            }
            Ok(report) => ProbeResponse::Upstream(
                passthrough_status(report.status_code),
                Json(ProbeFailureResponse::new(body_as_json(&report.body))),
            ),
            Err(err) => {
                let (_, json) = err.into_error_response();
                ProbeResponse::InternalError(json)
            }
        }
    }
}

#[OpenApi]
impl ConnectivityApi {
    /// Test the Perplexity API connection
    ///
    /// Sends a minimal chat request with a short timeout. A non-200 upstream
    /// status is passed through with the upstream body as `message`.
    #[oai(path = "/api/test", method = "get", tag = "ApiTags::Diagnostics")]
    async fn test_api(&self) -> ProbeResponse {
        self.probe().await
    }

    /// Test the Perplexity API connection
    ///
    /// Alias of `/api/test`.
    #[oai(
        path = "/api/test-perplexity",
        method = "get",
        tag = "ApiTags::Diagnostics"
    )]
    async fn test_perplexity(&self) -> ProbeResponse {
        self.probe().await
    }
}

#[derive(ApiResponse)]
pub enum ProbeResponse {
    #[oai(status = 200)]
    Ok(Json<ProbeSuccessResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    /// Status passed through from the Perplexity API
    Upstream(StatusCode, Json<ProbeFailureResponse>),
}
