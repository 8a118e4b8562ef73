use std::time::Duration;

use reqwest::Client;

use business::domain::connectivity::errors::ConnectivityError;
use business::domain::recipe::errors::RecipeError;

use crate::types::{ChatRequest, UpstreamChatResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.perplexity.ai";

/// Longest slice of an upstream body written to the logs.
pub const LOGGED_BODY_CHARS: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("API key not configured")]
    MissingCredential,
    #[error("{0}")]
    Transport(String),
}

impl From<ClientError> for RecipeError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingCredential => RecipeError::Configuration,
            ClientError::Transport(cause) => RecipeError::Transport(cause),
        }
    }
}

impl From<ClientError> for ConnectivityError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::MissingCredential => ConnectivityError::Configuration,
            ClientError::Transport(cause) => ConnectivityError::Transport(cause),
        }
    }
}

/// Shared Perplexity HTTP client configuration.
///
/// The credential is optional so the service can start without it; every
/// call then fails with [`ClientError::MissingCredential`] before any I/O.
#[derive(Clone)]
pub struct PerplexityClient {
    pub client: Client,
    api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl PerplexityClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder().build().unwrap_or_default(),
            api_key: api_key.filter(|key| !key.is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Builds the authorization header value.
    fn auth_header(&self) -> Result<String, ClientError> {
        self.api_key
            .as_ref()
            .map(|key| format!("Bearer {}", key))
            .ok_or(ClientError::MissingCredential)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends one chat-completion request. Non-200 answers are returned as-is;
    /// only failures to get an answer at all are errors.
    pub async fn send(
        &self,
        request: &ChatRequest,
        timeout: Duration,
    ) -> Result<UpstreamChatResponse, ClientError> {
        let auth = self.auth_header()?;

        let response = self
            .client
            .post(self.chat_completions_url())
            .timeout(timeout)
            .header("Content-Type", "application/json")
            .header("accept", "application/json")
            .header("Authorization", auth)
            .json(request)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status_code = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        tracing::debug!(
            status = status_code,
            body = %truncate_for_log(&body),
            "Perplexity API response"
        );

        Ok(UpstreamChatResponse { status_code, body })
    }
}

fn transport_error(err: reqwest::Error, timeout: Duration) -> ClientError {
    let cause = if err.is_timeout() {
        format!("request timed out after {}s", timeout.as_secs())
    } else {
        err.to_string()
    };
    tracing::error!(error = %cause, "HTTP request to Perplexity API failed");
    ClientError::Transport(cause)
}

pub fn truncate_for_log(body: &str) -> String {
    if body.chars().count() <= LOGGED_BODY_CHARS {
        return body.to_string();
    }
    let head: String = body.chars().take(LOGGED_BODY_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    fn request() -> ChatRequest {
        ChatRequest {
            model: "sonar-pro".to_string(),
            messages: vec![ChatMessage::user("Say hello")],
        }
    }

    #[test]
    fn should_build_chat_completions_url_without_double_slash() {
        let client = PerplexityClient::new(None, "https://api.perplexity.ai/", "sonar-pro");

        assert_eq!(
            client.chat_completions_url(),
            "https://api.perplexity.ai/chat/completions"
        );
    }

    #[test]
    fn should_treat_empty_key_as_missing() {
        let client = PerplexityClient::new(Some(String::new()), DEFAULT_BASE_URL, "sonar-pro");

        assert!(!client.has_credential());
    }

    #[test]
    fn should_truncate_long_bodies_for_logging() {
        let body = "x".repeat(LOGGED_BODY_CHARS + 20);

        let logged = truncate_for_log(&body);

        assert_eq!(logged.chars().count(), LOGGED_BODY_CHARS + 3);
        assert!(logged.ends_with("..."));
        assert_eq!(truncate_for_log("short"), "short");
    }

    #[tokio::test]
    async fn should_fail_before_any_io_when_key_missing() {
        // Port 9 (discard) would hang or refuse; the call must not get that far.
        let client = PerplexityClient::new(None, "http://127.0.0.1:9", "sonar-pro");

        let result = client.send(&request(), Duration::from_secs(1)).await;

        assert!(matches!(result.unwrap_err(), ClientError::MissingCredential));
    }

    #[tokio::test]
    async fn should_report_transport_error_when_connection_refused() {
        let client = PerplexityClient::new(
            Some("pplx-test".to_string()),
            "http://127.0.0.1:1",
            "sonar-pro",
        );

        let result = client.send(&request(), Duration::from_secs(2)).await;

        assert!(matches!(result.unwrap_err(), ClientError::Transport(_)));
    }

    #[test]
    fn should_map_client_errors_onto_domain_errors() {
        assert_eq!(
            RecipeError::from(ClientError::MissingCredential),
            RecipeError::Configuration
        );
        assert_eq!(
            ConnectivityError::from(ClientError::Transport("dns".to_string())),
            ConnectivityError::Transport("dns".to_string())
        );
    }
}
