//! Lenient JSON recovery from model output
//!
//! Models wrap their JSON answer in prose, markdown fences, or
//! chain-of-thought preamble. Recovery is two-stage: parse the whole output,
//! then fall back to the span between the first `{` and the last `}`.

use serde_json::{Map, Value};

/// Recover a JSON object from possibly noisy model output.
///
/// Returns `None` when no object can be recovered; that is an expected,
/// handled outcome (the caller reports the sentinel "unknown"), not a fault.
///
/// Known fragility, preserved for compatibility: when the output contains
/// several brace-delimited blocks, the first-`{`-to-last-`}` span covers all
/// of them and the parse usually fails, even if one block alone was valid.
pub fn extract_json_object(raw: &str) -> Option<Map<String, Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(Value::Object(obj)) = serde_json::from_str(trimmed) {
        return Some(obj);
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str(&raw[start..=end]) {
        Ok(Value::Object(obj)) => Some(obj),
        _ => None,
    }
}
