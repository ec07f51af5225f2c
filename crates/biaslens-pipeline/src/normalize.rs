//! Normalization of heterogeneous bias replies
//!
//! Models report bias as a number, a label string, or not at all, and have
//! drifted between `reasoning` and the legacy `rationale` key. This module
//! resolves all of that into the canonical `BiasResult` in one place.

use biaslens_domain::{BiasResult, BiasValue};
use serde_json::{Map, Value};

/// Coerce a raw `bias` field onto the canonical [-1, 1] scale.
///
/// Numbers are clamped. Strings are matched case-insensitively against the
/// known labels, then parsed as a float and clamped. Anything else yields
/// `None`.
pub fn parse_bias_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| v.clamp(-1.0, 1.0)),
        Value::String(s) => {
            let label = s.trim().to_lowercase();
            match label.as_str() {
                "left" | "liberal" => Some(-1.0),
                "right" | "conservative" => Some(1.0),
                "neutral" | "center" | "centre" | "middle" => Some(0.0),
                _ => label.parse::<f64>().ok().map(|v| v.clamp(-1.0, 1.0)),
            }
        }
        _ => None,
    }
}

/// Map a parsed model reply (or the absence of one) onto a `BiasResult`.
///
/// `None` means the parser recovered no object: the result carries the
/// sentinel `Unknown` plus the raw output, distinct from a reply whose
/// `bias` field is merely absent (`Unset`).
pub fn normalize(parsed: Option<Map<String, Value>>, raw_output: &str) -> BiasResult {
    let obj = match parsed {
        Some(obj) => obj,
        None => {
            return BiasResult {
                bias: BiasValue::Unknown,
                confidence: None,
                reasoning: None,
                rationale: None,
                raw_output: Some(raw_output.to_string()),
            };
        }
    };

    let bias = match obj.get("bias") {
        None | Some(Value::Null) => BiasValue::Unset,
        Some(value) => match parse_bias_score(value) {
            Some(score) => BiasValue::Score(score),
            None => BiasValue::Unknown,
        },
    };

    let rationale = obj
        .get("rationale")
        .and_then(Value::as_str)
        .map(str::to_string);

    // The explicit "reasoning" key wins over the legacy "rationale" key
    let reasoning = obj
        .get("reasoning")
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| rationale.clone());

    let confidence = obj
        .get("confidence")
        .filter(|v| !v.is_null())
        .cloned();

    BiasResult {
        bias,
        confidence,
        reasoning,
        rationale,
        raw_output: Some(raw_output.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_label_coercion() {
        assert_eq!(parse_bias_score(&json!("left")), Some(-1.0));
        assert_eq!(parse_bias_score(&json!("Liberal")), Some(-1.0));
        assert_eq!(parse_bias_score(&json!("right")), Some(1.0));
        assert_eq!(parse_bias_score(&json!("CONSERVATIVE")), Some(1.0));
        assert_eq!(parse_bias_score(&json!("neutral")), Some(0.0));
        assert_eq!(parse_bias_score(&json!("centre")), Some(0.0));
        assert_eq!(parse_bias_score(&json!("middle")), Some(0.0));
    }

    #[test]
    fn test_numeric_clamping() {
        assert_eq!(parse_bias_score(&json!(2.5)), Some(1.0));
        assert_eq!(parse_bias_score(&json!(-3)), Some(-1.0));
        assert_eq!(parse_bias_score(&json!(0.25)), Some(0.25));
    }

    #[test]
    fn test_numeric_string_coercion() {
        assert_eq!(parse_bias_score(&json!("0.7")), Some(0.7));
        assert_eq!(parse_bias_score(&json!("-4")), Some(-1.0));
    }

    #[test]
    fn test_gibberish_yields_none() {
        assert_eq!(parse_bias_score(&json!("gibberish")), None);
        assert_eq!(parse_bias_score(&json!(null)), None);
        assert_eq!(parse_bias_score(&json!([1, 2])), None);
    }

    #[test]
    fn test_normalize_without_object_is_unknown() {
        let result = normalize(None, "no braces here");
        assert_eq!(result.bias, BiasValue::Unknown);
        assert_eq!(result.raw_output.as_deref(), Some("no braces here"));
        assert!(result.reasoning.is_none());
    }

    #[test]
    fn test_normalize_full_reply() {
        let parsed = obj(json!({
            "bias": "left",
            "confidence": 0.8,
            "reasoning": "Uses charged framing."
        }));
        let result = normalize(Some(parsed), "raw");
        assert_eq!(result.bias, BiasValue::Score(-1.0));
        assert_eq!(result.confidence, Some(json!(0.8)));
        assert_eq!(result.reasoning.as_deref(), Some("Uses charged framing."));
    }

    #[test]
    fn test_normalize_missing_bias_is_unset() {
        let parsed = obj(json!({"confidence": "high"}));
        let result = normalize(Some(parsed), "raw");
        assert_eq!(result.bias, BiasValue::Unset);
        assert_eq!(result.confidence, Some(json!("high")));
    }

    #[test]
    fn test_normalize_uncoercible_bias_is_unknown() {
        let parsed = obj(json!({"bias": "somewhat spicy"}));
        let result = normalize(Some(parsed), "raw");
        assert_eq!(result.bias, BiasValue::Unknown);
    }

    #[test]
    fn test_legacy_rationale_fallback() {
        let parsed = obj(json!({"bias": 0.0, "rationale": "Balanced sourcing."}));
        let result = normalize(Some(parsed), "raw");
        assert_eq!(result.reasoning.as_deref(), Some("Balanced sourcing."));
        assert_eq!(result.rationale.as_deref(), Some("Balanced sourcing."));
    }

    #[test]
    fn test_reasoning_preferred_over_rationale() {
        let parsed = obj(json!({
            "bias": 0.0,
            "reasoning": "new key",
            "rationale": "old key"
        }));
        let result = normalize(Some(parsed), "raw");
        assert_eq!(result.reasoning.as_deref(), Some("new key"));
        assert_eq!(result.rationale.as_deref(), Some("old key"));
    }
}
