//! Canonical bias score representation
//!
//! Model replies are duck-typed: `bias` arrives as a number, a label string,
//! or not at all. `BiasValue` is the tagged union that resolves that drift
//! once, at the normalization boundary; downstream code only ever sees this
//! canonical form.

use serde::ser::Serializer;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Canonical bias value: a clamped score or one of the sentinel outcomes.
///
/// The sentinels distinguish "model responded but not in the expected shape"
/// (`Unknown`) from "model never responded" (`Timeout`) from "invocation
/// failed" (`Failed`) from "field simply absent" (`Unset`).
#[derive(Debug, Clone, PartialEq)]
pub enum BiasValue {
    /// Numeric score in [-1, 1]; -1 left, 0 neutral, 1 right
    Score(f64),
    /// The bias field was missing or null in an otherwise valid reply
    Unset,
    /// The model replied but no usable bias could be recovered
    Unknown,
    /// The model exceeded its allotted time
    Timeout,
    /// The invocation itself failed, with the underlying cause
    Failed(String),
}

impl BiasValue {
    /// Clamp a raw number into the canonical [-1, 1] score range.
    pub fn from_score(raw: f64) -> Self {
        BiasValue::Score(raw.clamp(-1.0, 1.0))
    }

    /// The numeric score, when one was obtained.
    pub fn score(&self) -> Option<f64> {
        match self {
            BiasValue::Score(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether this value is one of the non-numeric sentinels.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, BiasValue::Score(_) | BiasValue::Unset)
    }
}

// Encodes scores as JSON numbers and sentinels as the wire-format strings
// callers match on ("unknown", "timeout", "error: ...").
impl Serialize for BiasValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BiasValue::Score(v) => serializer.serialize_f64(*v),
            BiasValue::Unset => serializer.serialize_none(),
            BiasValue::Unknown => serializer.serialize_str("unknown"),
            BiasValue::Timeout => serializer.serialize_str("timeout"),
            BiasValue::Failed(cause) => serializer.serialize_str(&format!("error: {}", cause)),
        }
    }
}

impl fmt::Display for BiasValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiasValue::Score(v) => write!(f, "{:.2}", v),
            BiasValue::Unset => write!(f, "none"),
            BiasValue::Unknown => write!(f, "unknown"),
            BiasValue::Timeout => write!(f, "timeout"),
            BiasValue::Failed(cause) => write!(f, "error: {}", cause),
        }
    }
}

/// The canonical analysis record returned to every caller.
#[derive(Debug, Clone, Serialize)]
pub struct BiasResult {
    /// Normalized bias value
    pub bias: BiasValue,

    /// Model-reported confidence, passed through as-is (number or string)
    pub confidence: Option<Value>,

    /// Unified rationale text; prefers the `reasoning` key over the legacy
    /// `rationale` key
    pub reasoning: Option<String>,

    /// The legacy `rationale` field, preserved verbatim when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,

    /// Raw model output, kept for diagnostics
    pub raw_output: Option<String>,
}

impl BiasResult {
    /// A result carrying only a sentinel, with no parsed fields.
    pub fn sentinel(bias: BiasValue) -> Self {
        Self {
            bias,
            confidence: None,
            reasoning: None,
            rationale: None,
            raw_output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_clamps() {
        assert_eq!(BiasValue::from_score(2.5), BiasValue::Score(1.0));
        assert_eq!(BiasValue::from_score(-3.0), BiasValue::Score(-1.0));
        assert_eq!(BiasValue::from_score(0.4), BiasValue::Score(0.4));
    }

    #[test]
    fn test_serialize_score_as_number() {
        let json = serde_json::to_string(&BiasValue::Score(-0.5)).unwrap();
        assert_eq!(json, "-0.5");
    }

    #[test]
    fn test_serialize_sentinels_as_strings() {
        assert_eq!(
            serde_json::to_string(&BiasValue::Unknown).unwrap(),
            "\"unknown\""
        );
        assert_eq!(
            serde_json::to_string(&BiasValue::Timeout).unwrap(),
            "\"timeout\""
        );
        assert_eq!(
            serde_json::to_string(&BiasValue::Failed("boom".into())).unwrap(),
            "\"error: boom\""
        );
    }

    #[test]
    fn test_serialize_unset_as_null() {
        let json = serde_json::to_string(&BiasValue::Unset).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_sentinel_classification() {
        assert!(BiasValue::Timeout.is_sentinel());
        assert!(BiasValue::Unknown.is_sentinel());
        assert!(!BiasValue::Score(0.0).is_sentinel());
        assert!(!BiasValue::Unset.is_sentinel());
    }
}
