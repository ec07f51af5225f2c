//! Best-effort diagnostic run log
//!
//! One file per invocation, overwritten each run, holding the prompt, the
//! raw model output, and the recovered JSON. Diagnostic-only: a failed write
//! is reported through tracing and never fails the analysis.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable overriding the run-log location.
pub const LOG_PATH_ENV: &str = "BIASLENS_LOG_PATH";

/// Marker written when no JSON could be recovered from the output.
const NO_JSON_MARKER: &str = "None";

/// Resolve the run-log path for a model: `BIASLENS_LOG_PATH` when set,
/// otherwise `<model_name>_run.log` in the working directory.
pub fn default_log_path(model_name: &str) -> PathBuf {
    match std::env::var(LOG_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(format!("{}_run.log", model_name)),
    }
}

/// Write the run log, creating parent directories as needed.
///
/// The file always holds three sections in fixed order: the prompt, the raw
/// output, and the pretty-printed parsed JSON (or the `None` marker).
pub fn write_run_log(
    path: &Path,
    prompt: &str,
    raw_output: &str,
    parsed: Option<&Map<String, Value>>,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let parsed_section = match parsed {
        Some(obj) => serde_json::to_string_pretty(&Value::Object(obj.clone()))
            .unwrap_or_else(|_| NO_JSON_MARKER.to_string()),
        None => NO_JSON_MARKER.to_string(),
    };

    let contents = format!(
        "=== Prompt ===\n{}\n\n=== Raw Output ===\n{}\n\n=== Parsed JSON ===\n{}\n",
        prompt, raw_output, parsed_section
    );

    fs::write(path, contents)
}

/// Write the run log, swallowing any failure with a warning.
pub fn log_run(path: &Path, prompt: &str, raw_output: &str, parsed: Option<&Map<String, Value>>) {
    if let Err(e) = write_run_log(path, prompt, raw_output, parsed) {
        warn!(path = %path.display(), error = %e, "failed to write run log");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_sections_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mistral_run.log");

        let parsed = json!({"bias": 0.5}).as_object().unwrap().clone();
        write_run_log(&path, "the prompt", "the output", Some(&parsed)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let prompt_at = contents.find("=== Prompt ===").unwrap();
        let raw_at = contents.find("=== Raw Output ===").unwrap();
        let parsed_at = contents.find("=== Parsed JSON ===").unwrap();
        assert!(prompt_at < raw_at && raw_at < parsed_at);
        assert!(contents.contains("the prompt"));
        assert!(contents.contains("the output"));
        assert!(contents.contains("\"bias\": 0.5"));
    }

    #[test]
    fn test_none_marker_when_no_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        write_run_log(&path, "p", "gibberish", None).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.ends_with("=== Parsed JSON ===\nNone\n"));
    }

    #[test]
    fn test_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        write_run_log(&path, "first", "a", None).unwrap();
        write_run_log(&path, "second", "b", None).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("second"));
        assert!(!contents.contains("first"));
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/run.log");

        write_run_log(&path, "p", "o", None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_log_run_swallows_failures() {
        // A directory path cannot be written as a file; must not panic
        let dir = tempfile::tempdir().unwrap();
        log_run(dir.path(), "p", "o", None);
    }

    #[test]
    fn test_default_path_uses_model_name() {
        std::env::remove_var(LOG_PATH_ENV);
        assert_eq!(default_log_path("mistral"), PathBuf::from("mistral_run.log"));
    }
}
