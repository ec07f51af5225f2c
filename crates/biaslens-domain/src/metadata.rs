//! Extraction and truncation metadata

use serde::{Deserialize, Serialize};

/// What kind of input the extractor decided it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Plain text, passed through verbatim
    Text,
    /// Inline HTML markup
    Html,
    /// An absolute http(s) URL that was fetched
    Url,
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Text
    }
}

/// Metadata describing how input text was obtained.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Source classification
    pub source_kind: SourceKind,

    /// Whether markup extraction actually ran (false for plain text)
    pub extracted: bool,

    /// The original URL when `source_kind` is `Url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Accounting for the word-count truncation step.
///
/// Invariants: `words_cut == max(0, original - truncated)` and
/// `truncated_word_count` never exceeds the requested word budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationMetadata {
    /// Word count before truncation
    pub original_word_count: usize,

    /// Word count after truncation
    pub truncated_word_count: usize,

    /// Number of words removed
    pub words_cut: usize,
}

impl TruncationMetadata {
    /// Build metadata from the two observed word counts.
    pub fn from_counts(original: usize, truncated: usize) -> Self {
        Self {
            original_word_count: original,
            truncated_word_count: truncated,
            words_cut: original.saturating_sub(truncated),
        }
    }
}
