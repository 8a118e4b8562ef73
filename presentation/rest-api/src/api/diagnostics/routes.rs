use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::diagnostics::use_cases::get::GetDiagnosticsUseCase;

use crate::api::diagnostics::dto::DiagnosticsResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct DiagnosticsApi {
    get_use_case: Arc<dyn GetDiagnosticsUseCase>,
}

impl DiagnosticsApi {
    pub fn new(get_use_case: Arc<dyn GetDiagnosticsUseCase>) -> Self {
        Self { get_use_case }
    }
}

#[OpenApi]
impl DiagnosticsApi {
    /// Configuration diagnostics
    ///
    /// Reads the process environment live and reports whether the Perplexity
    /// key is configured. Never returns the key itself.
    #[oai(path = "/api/debug", method = "get", tag = "ApiTags::Diagnostics")]
    async fn debug_config(&self) -> GetDiagnosticsResponse {
        match self.get_use_case.execute() {
            Ok(report) => GetDiagnosticsResponse::Ok(Json(report.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetDiagnosticsResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetDiagnosticsResponse {
    #[oai(status = 200)]
    Ok(Json<DiagnosticsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::diagnostics::get::GetDiagnosticsUseCaseImpl;
    use business::domain::diagnostics::errors::DiagnosticsError;
    use business::domain::diagnostics::services::EnvironmentReader;
    use logger::TracingLogger;
    use mockall::mock;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    mock! {
        pub Env {}

        impl EnvironmentReader for Env {
            fn var(&self, name: &str) -> Option<String>;
            fn vars(&self) -> Vec<(String, String)>;
            fn current_dir(&self) -> Result<String, DiagnosticsError>;
            fn file_exists_in(&self, dir: &str, file_name: &str) -> bool;
        }
    }

    fn client(env: MockEnv) -> TestClient<Route> {
        let use_case = Arc::new(GetDiagnosticsUseCaseImpl {
            environment: Arc::new(env),
            credential_var: "PERPLEXCIPE_PERPLEXITY_API_KEY".to_string(),
            logger: Arc::new(TracingLogger),
        });
        let api = OpenApiService::new(DiagnosticsApi::new(use_case), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", api))
    }

    #[tokio::test]
    async fn should_report_masked_configuration() {
        let mut env = MockEnv::new();
        env.expect_var()
            .returning(|_| Some("pplx-0123456789abcdef".to_string()));
        env.expect_vars().returning(|| {
            vec![
                (
                    "PERPLEXCIPE_PERPLEXITY_API_KEY".to_string(),
                    "pplx-0123456789abcdef".to_string(),
                ),
                ("HOME".to_string(), "/home/app".to_string()),
            ]
        });
        env.expect_current_dir()
            .returning(|| Ok("/srv/app".to_string()));
        env.expect_file_exists_in().returning(|_, _| false);

        let resp = client(env).get("/api/debug").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "api_key_exists": true,
            "api_key_length": 21,
            "api_key_prefix": "pplx-01...",
            "relevant_env_vars": {"PERPLEXCIPE_PERPLEXITY_API_KEY": "pplx-01..."},
            "cwd": "/srv/app",
            "env_file_exists": false
        }))
        .await;
    }

    #[tokio::test]
    async fn should_report_null_prefix_when_key_missing() {
        let mut env = MockEnv::new();
        env.expect_var().returning(|_| None);
        env.expect_vars().returning(Vec::new);
        env.expect_current_dir().returning(|| Ok("/".to_string()));
        env.expect_file_exists_in().returning(|_, _| false);

        let resp = client(env).get("/api/debug").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("api_key_exists").assert_bool(false);
        body.get("api_key_prefix").assert_null();
    }

    #[tokio::test]
    async fn should_answer_internal_error_when_environment_unreadable() {
        let mut env = MockEnv::new();
        env.expect_var().returning(|_| None);
        env.expect_vars().returning(Vec::new);
        env.expect_current_dir().returning(|| {
            Err(DiagnosticsError::EnvironmentUnavailable(
                "permission denied".to_string(),
            ))
        });
        env.expect_file_exists_in().returning(|_, _| false);

        let resp = client(env).get("/api/debug").send().await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        resp.assert_json(json!({
            "error": "Unable to read process environment: permission denied"
        }))
        .await;
    }
}
