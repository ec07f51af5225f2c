//! Configuration for the analysis pipeline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the Analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum time for one model invocation (seconds)
    pub model_timeout_secs: u64,

    /// Maximum time for fetching a URL input (seconds)
    pub fetch_timeout_secs: u64,

    /// Explicit run-log path; when unset the log lands at
    /// `<model_name>_run.log` (or wherever `BIASLENS_LOG_PATH` points)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

impl AnalyzerConfig {
    /// Model invocation timeout as a Duration.
    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    /// URL fetch timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_timeout_secs == 0 {
            return Err("model_timeout_secs must be greater than 0".to_string());
        }
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_timeout_secs: 240,
            fetch_timeout_secs: 10,
            log_path: None,
        }
    }
}
