//! Single-request analysis orchestration

use crate::config::AnalyzerConfig;
use crate::error::PipelineError;
use crate::normalize::normalize;
use crate::parser::extract_json_object;
use crate::prompt::build_prompt;
use crate::runlog::{default_log_path, log_run};
use biaslens_domain::{
    AnalysisRequest, BiasResult, BiasValue, ExtractionMetadata, ModelOutcome, ModelRunner,
    TruncationMetadata,
};
use biaslens_extract::{truncate_words, Extractor};
use tracing::{debug, info};

/// Everything one analysis produced: the canonical result plus the
/// metadata callers render (source kind, words cut) and the prompt that was
/// actually sent.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Canonical normalized result
    pub result: BiasResult,

    /// How the input text was obtained
    pub extraction: ExtractionMetadata,

    /// Truncation accounting
    pub truncation: TruncationMetadata,

    /// The prompt sent to the model
    pub prompt: String,
}

/// Runs the full pipeline for one request: extract → truncate → prompt →
/// model → parse → normalize, with the run log written as a side effect.
///
/// One pipeline instance per flow of requests; no state is shared between
/// concurrent requests except the per-model-name log file.
pub struct Analyzer<R: ModelRunner> {
    runner: R,
    extractor: Extractor,
    config: AnalyzerConfig,
}

impl<R: ModelRunner> Analyzer<R> {
    /// Create an analyzer with the given backend and configuration.
    pub fn new(runner: R, config: AnalyzerConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        let extractor = Extractor::with_fetch_timeout(config.fetch_timeout())?;
        Ok(Self {
            runner,
            extractor,
            config,
        })
    }

    /// Analyze one request end to end.
    ///
    /// Validation and extraction failures abort with an error; every model
    /// outcome (timeout, invocation failure, unparseable output) is encoded
    /// as a sentinel in the returned report.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisReport, PipelineError> {
        self.validate(request)?;

        let (text, extraction) = self.extractor.extract(&request.raw_input).await?;
        self.run_prepared(text, extraction, request).await
    }

    /// Analyze pre-extracted plain text, bypassing source detection.
    ///
    /// Batch inputs are always raw text files, never URLs or HTML, so the
    /// batch path forces the plain-text source instead of re-classifying.
    pub async fn analyze_plain_text(
        &self,
        text: &str,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, PipelineError> {
        self.validate(request)?;
        self.run_prepared(text.trim().to_string(), ExtractionMetadata::default(), request)
            .await
    }

    fn validate(&self, request: &AnalysisRequest) -> Result<(), PipelineError> {
        if request.raw_input.trim().is_empty() {
            return Err(PipelineError::Validation(
                "input text is empty".to_string(),
            ));
        }
        if request.max_words == 0 {
            return Err(PipelineError::Validation(
                "max_words must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    async fn run_prepared(
        &self,
        text: String,
        extraction: ExtractionMetadata,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport, PipelineError> {
        let (bounded, truncation) = truncate_words(&text, request.max_words);
        info!(
            kept = truncation.truncated_word_count,
            cut = truncation.words_cut,
            "prepared input text"
        );

        let prompt = build_prompt(request.prompt_template.as_deref(), &bounded);
        debug!(prompt_len = prompt.len(), model = %request.model_name, "built prompt");

        let outcome = self
            .runner
            .run(&prompt, self.config.model_timeout())
            .await;

        let result = match outcome {
            ModelOutcome::Completed(output) => {
                debug!(output_len = output.stdout.len(), "model replied");
                let parsed = extract_json_object(&output.stdout);

                let log_path = self
                    .config
                    .log_path
                    .clone()
                    .unwrap_or_else(|| default_log_path(&request.model_name));
                log_run(&log_path, &prompt, &output.stdout, parsed.as_ref());

                normalize(parsed, &output.stdout)
            }
            ModelOutcome::TimedOut => BiasResult::sentinel(BiasValue::Timeout),
            ModelOutcome::Failed(cause) => BiasResult::sentinel(BiasValue::Failed(cause)),
        };

        Ok(AnalysisReport {
            result,
            extraction,
            truncation,
            prompt,
        })
    }
}
