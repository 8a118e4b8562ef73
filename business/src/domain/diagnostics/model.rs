use std::collections::BTreeMap;

/// Snapshot of the configuration state that is safe to show to an operator.
///
/// Never holds the full credential: only its length and a short prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsReport {
    pub key_configured: bool,
    pub key_length: usize,
    pub key_prefix: Option<String>,
    pub filtered_env: BTreeMap<String, String>,
    pub cwd: String,
    pub env_file_exists: bool,
}
