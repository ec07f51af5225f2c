//! Analysis request value object

use serde::{Deserialize, Serialize};

/// Default number of words kept when truncating input text.
pub const DEFAULT_MAX_WORDS: usize = 200;

/// One bias-analysis request, constructed once per user action.
///
/// The request is passed by value into the pipeline; there is no ambient
/// session state behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Raw user input: plain text, an HTML snippet, or a URL
    pub raw_input: String,

    /// Maximum number of words sent to the model
    pub max_words: usize,

    /// Optional custom prompt template; `{text}` marks the insertion point
    pub prompt_template: Option<String>,

    /// Short name of the model to invoke (e.g. "mistral")
    pub model_name: String,
}

impl AnalysisRequest {
    /// Create a request with the default word budget and no custom template.
    pub fn new(raw_input: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            max_words: DEFAULT_MAX_WORDS,
            prompt_template: None,
            model_name: model_name.into(),
        }
    }

    /// Override the maximum word count.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Supply a custom prompt template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = Some(template.into());
        self
    }
}
