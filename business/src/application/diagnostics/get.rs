use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::diagnostics::errors::DiagnosticsError;
use crate::domain::diagnostics::model::DiagnosticsReport;
use crate::domain::diagnostics::services::EnvironmentReader;
use crate::domain::diagnostics::use_cases::get::GetDiagnosticsUseCase;
use crate::domain::logger::Logger;

/// Case-sensitive substrings that make an environment variable worth reporting.
pub const RELEVANT_ENV_TOKENS: [&str; 2] = ["PERPLEXITY", "API"];

pub const KEY_PREFIX_CHARS: usize = 7;
pub const ENV_VALUE_CHARS: usize = 10;

const ENV_FILE: &str = ".env";

pub struct GetDiagnosticsUseCaseImpl {
    pub environment: Arc<dyn EnvironmentReader>,
    /// Name of the variable holding the upstream credential.
    pub credential_var: String,
    pub logger: Arc<dyn Logger>,
}

impl GetDiagnosticsUseCaseImpl {
    fn masked(value: &str, keep: usize) -> String {
        let prefix: String = value.chars().take(keep).collect();
        format!("{}...", prefix)
    }

    fn is_relevant(name: &str) -> bool {
        RELEVANT_ENV_TOKENS.iter().any(|token| name.contains(token))
    }

    fn filter_env(
        &self,
        vars: Vec<(String, String)>,
        api_key: Option<&str>,
    ) -> BTreeMap<String, String> {
        vars.into_iter()
            .filter(|(name, _)| Self::is_relevant(name))
            .map(|(name, value)| {
                // The credential keeps the shorter prefix under any name it is set as.
                let is_credential =
                    name == self.credential_var || api_key.is_some_and(|key| key == value);
                let keep = if is_credential {
                    KEY_PREFIX_CHARS
                } else {
                    ENV_VALUE_CHARS
                };
                let masked = Self::masked(&value, keep);
                (name, masked)
            })
            .collect()
    }
}

impl GetDiagnosticsUseCase for GetDiagnosticsUseCaseImpl {
    fn execute(&self) -> Result<DiagnosticsReport, DiagnosticsError> {
        self.logger.debug("Collecting configuration diagnostics");

        let api_key = self
            .environment
            .var(&self.credential_var)
            .filter(|key| !key.is_empty());

        let cwd = self.environment.current_dir().inspect_err(|err| {
            self.logger.error(&format!("Diagnostics failed: {}", err));
        })?;

        let report = DiagnosticsReport {
            key_configured: api_key.is_some(),
            key_length: api_key.as_ref().map_or(0, |key| key.chars().count()),
            key_prefix: api_key
                .as_ref()
                .map(|key| Self::masked(key, KEY_PREFIX_CHARS)),
            filtered_env: self.filter_env(self.environment.vars(), api_key.as_deref()),
            env_file_exists: self.environment.file_exists_in(&cwd, ENV_FILE),
            cwd,
        };

        self.logger.info(&format!(
            "Diagnostics: key configured = {}, {} relevant variables",
            report.key_configured,
            report.filtered_env.len()
        ));

        Ok(report)
    }
}
