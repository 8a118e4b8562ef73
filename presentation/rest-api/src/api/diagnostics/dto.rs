use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::diagnostics::model::DiagnosticsReport;

/// Configuration snapshot safe to expose: the credential only appears as its
/// length and a short prefix.
#[derive(Debug, Clone, Object)]
pub struct DiagnosticsResponse {
    pub api_key_exists: bool,
    pub api_key_length: usize,
    /// First 7 characters followed by "...", or null when no key is set
    pub api_key_prefix: Option<String>,
    /// Variables whose names contain PERPLEXITY or API, values truncated
    pub relevant_env_vars: BTreeMap<String, String>,
    pub cwd: String,
    pub env_file_exists: bool,
}

impl From<DiagnosticsReport> for DiagnosticsResponse {
    fn from(r: DiagnosticsReport) -> Self {
        Self {
            api_key_exists: r.key_configured,
            api_key_length: r.key_length,
            api_key_prefix: r.key_prefix,
            relevant_env_vars: r.filtered_env,
            cwd: r.cwd,
            env_file_exists: r.env_file_exists,
        }
    }
}
