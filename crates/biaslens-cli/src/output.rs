//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use biaslens_domain::{BiasValue, SourceKind};
use biaslens_pipeline::{AnalysisReport, BatchSummary};
use colored::*;

/// Output format.
#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Quiet (bias value only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.result)?),
            OutputFormat::Quiet => Ok(report.result.bias.to_string()),
            OutputFormat::Text => Ok(self.format_report_text(report)),
        }
    }

    fn format_report_text(&self, report: &AnalysisReport) -> String {
        let mut lines = Vec::new();

        let bias_line = match &report.result.bias {
            BiasValue::Score(score) => {
                let label = bias_label(*score);
                let text = format!("Bias: {:.2} ({})", score, label);
                match label {
                    "left" => self.colorize(&text, "red"),
                    "right" => self.colorize(&text, "blue"),
                    _ => text,
                }
            }
            BiasValue::Unset => "Bias: not reported".to_string(),
            sentinel => self.colorize(&format!("Bias: {}", sentinel), "yellow"),
        };
        lines.push(bias_line);

        let confidence = report
            .result
            .confidence
            .as_ref()
            .map(value_to_display)
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("Confidence: {}", confidence));

        let reasoning = report
            .result
            .reasoning
            .as_deref()
            .unwrap_or("No reasoning provided.");
        lines.push(format!("Reasoning: {}", reasoning));

        let source = match report.extraction.source_kind {
            SourceKind::Text => "plain text".to_string(),
            SourceKind::Html => "HTML".to_string(),
            SourceKind::Url => format!(
                "URL ({})",
                report.extraction.source_url.as_deref().unwrap_or("?")
            ),
        };
        lines.push(format!(
            "Source: {} | words sent: {} | words cut: {}",
            source, report.truncation.truncated_word_count, report.truncation.words_cut
        ));

        lines.join("\n")
    }

    /// Format a batch summary.
    pub fn format_summary(&self, summary: &BatchSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "processed_files": summary.processed_files,
                "results_directory": summary.results_directory,
            }))?),
            OutputFormat::Quiet => Ok(summary.processed_files.to_string()),
            OutputFormat::Text => Ok(self.success(&format!(
                "Processed {} file(s); results in {}",
                summary.processed_files,
                summary.results_directory.display()
            ))),
        }
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Qualitative label for a numeric bias score.
fn bias_label(score: f64) -> &'static str {
    if score <= -0.2 {
        "left"
    } else if score >= 0.2 {
        "right"
    } else {
        "neutral"
    }
}

fn value_to_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biaslens_domain::{BiasResult, ExtractionMetadata, TruncationMetadata};

    fn report_with(bias: BiasValue) -> AnalysisReport {
        AnalysisReport {
            result: BiasResult {
                bias,
                confidence: Some(serde_json::json!(0.8)),
                reasoning: Some("Balanced overall.".to_string()),
                rationale: None,
                raw_output: Some("raw".to_string()),
            },
            extraction: ExtractionMetadata::default(),
            truncation: TruncationMetadata::from_counts(120, 100),
            prompt: String::new(),
        }
    }

    #[test]
    fn test_bias_labels() {
        assert_eq!(bias_label(-0.8), "left");
        assert_eq!(bias_label(-0.2), "left");
        assert_eq!(bias_label(0.0), "neutral");
        assert_eq!(bias_label(0.2), "right");
        assert_eq!(bias_label(1.0), "right");
    }

    #[test]
    fn test_text_format_includes_all_fields() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let out = formatter.format_report(&report_with(BiasValue::Score(-0.6))).unwrap();
        assert!(out.contains("Bias: -0.60 (left)"));
        assert!(out.contains("Confidence: 0.8"));
        assert!(out.contains("Balanced overall."));
        assert!(out.contains("words cut: 20"));
    }

    #[test]
    fn test_quiet_format_is_bias_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let out = formatter.format_report(&report_with(BiasValue::Timeout)).unwrap();
        assert_eq!(out, "timeout");
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let out = formatter
            .format_report(&report_with(BiasValue::Score(0.4)))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["bias"], 0.4);
        assert_eq!(value["reasoning"], "Balanced overall.");
    }

    #[test]
    fn test_sentinel_rendering() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let out = formatter
            .format_report(&report_with(BiasValue::Failed("spawn failed".into())))
            .unwrap();
        assert!(out.contains("Bias: error: spawn failed"));
    }
}
