use super::errors::DiagnosticsError;

/// Port over the live process environment.
pub trait EnvironmentReader: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
    fn vars(&self) -> Vec<(String, String)>;
    fn current_dir(&self) -> Result<String, DiagnosticsError>;
    /// Whether `file_name` inside `dir` exists and is a regular file.
    fn file_exists_in(&self, dir: &str, file_name: &str) -> bool;
}
