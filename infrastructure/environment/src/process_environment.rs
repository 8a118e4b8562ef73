use std::env;
use std::path::Path;

use business::domain::diagnostics::errors::DiagnosticsError;
use business::domain::diagnostics::services::EnvironmentReader;

/// Reads the live process environment on every call.
pub struct ProcessEnvironment;

impl EnvironmentReader for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }

    fn vars(&self) -> Vec<(String, String)> {
        // vars_os never panics on non-UTF-8 entries, unlike vars.
        env::vars_os()
            .map(|(name, value)| {
                (
                    name.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }

    fn current_dir(&self) -> Result<String, DiagnosticsError> {
        env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .map_err(|e| DiagnosticsError::EnvironmentUnavailable(e.to_string()))
    }

    fn file_exists_in(&self, dir: &str, file_name: &str) -> bool {
        Path::new(dir).join(file_name).is_file()
    }
}
