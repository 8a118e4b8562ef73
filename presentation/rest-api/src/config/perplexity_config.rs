use std::time::Duration;

use anyhow::{Context, anyhow};
use perplexity::client::DEFAULT_BASE_URL;
use perplexity::connectivity_probe::DEFAULT_PROBE_TIMEOUT;
use perplexity::prompt::PromptVersion;
use perplexity::recipe_extractor::DEFAULT_EXTRACTION_TIMEOUT;

pub const DEFAULT_CREDENTIAL_VAR: &str = "PERPLEXCIPE_PERPLEXITY_API_KEY";
pub const DEFAULT_MODEL: &str = "sonar-pro";

/// Configuration for Perplexity API access.
///
/// Environment variables:
/// - PERPLEXITY_API_KEY_VAR: name of the variable holding the credential
///   (default: "PERPLEXCIPE_PERPLEXITY_API_KEY")
/// - PERPLEXITY_BASE_URL (default: "https://api.perplexity.ai")
/// - PERPLEXITY_MODEL (default: "sonar-pro")
/// - RECIPE_PROMPT_VERSION: "detailed" or "concise" (default: "detailed")
/// - PERPLEXITY_TIMEOUT_SECS (default: 30)
/// - PERPLEXITY_PROBE_TIMEOUT_SECS (default: 10)
///
/// A missing credential is not a startup error: health and diagnostics keep
/// working and recipe calls report the misconfiguration.
pub struct PerplexityConfig {
    pub credential_var: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub prompt_version: PromptVersion,
    pub timeout: Duration,
    pub probe_timeout: Duration,
}

impl PerplexityConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let credential_var = lookup("PERPLEXITY_API_KEY_VAR")
            .unwrap_or_else(|| DEFAULT_CREDENTIAL_VAR.to_string());
        let api_key = lookup(&credential_var).filter(|key| !key.trim().is_empty());

        let prompt_version = match lookup("RECIPE_PROMPT_VERSION") {
            Some(raw) => raw.parse::<PromptVersion>().map_err(|e| anyhow!(e))?,
            None => PromptVersion::default(),
        };

        Ok(Self {
            api_key,
            base_url: lookup("PERPLEXITY_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: lookup("PERPLEXITY_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prompt_version,
            timeout: parse_secs(&lookup, "PERPLEXITY_TIMEOUT_SECS", DEFAULT_EXTRACTION_TIMEOUT)?,
            probe_timeout: parse_secs(
                &lookup,
                "PERPLEXITY_PROBE_TIMEOUT_SECS",
                DEFAULT_PROBE_TIMEOUT,
            )?,
            credential_var,
        })
    }
}

fn parse_secs(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: Duration,
) -> anyhow::Result<Duration> {
    match lookup(name) {
        Some(raw) => {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{name} must be a whole number of seconds, got {raw}"))?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(default),
    }
}
