#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DiagnosticsError {
    #[error("Unable to read process environment: {0}")]
    EnvironmentUnavailable(String),
}
