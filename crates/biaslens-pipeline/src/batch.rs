//! Batch analysis over a folder of text files

use crate::analyzer::Analyzer;
use crate::error::PipelineError;
use biaslens_domain::{AnalysisRequest, BiasValue, ModelRunner};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Summary of one batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Number of input files a result was written for
    pub processed_files: usize,

    /// Directory the result files were written to
    pub results_directory: PathBuf,
}

/// Processes every `.txt` file in a folder through the pipeline, one file
/// at a time, writing one JSON result per input.
///
/// Files are processed strictly sequentially: the local model is a
/// singleton accessed by name and cannot serve overlapping invocations,
/// and the per-model run log is clobbered on every write.
pub struct BatchCoordinator<R: ModelRunner> {
    analyzer: Analyzer<R>,
    model_name: String,
    max_words: usize,
    prompt_template: Option<String>,
}

impl<R: ModelRunner> BatchCoordinator<R> {
    /// Create a coordinator running every file against the named model.
    pub fn new(analyzer: Analyzer<R>, model_name: impl Into<String>, max_words: usize) -> Self {
        Self {
            analyzer,
            model_name: model_name.into(),
            max_words,
            prompt_template: None,
        }
    }

    /// Use a custom prompt template for every file.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = Some(template.into());
        self
    }

    /// Analyze each `.txt` file in `folder` and write per-file results
    /// under its `results` subdirectory.
    ///
    /// Fails fast when the folder is missing or holds no eligible files.
    /// Past that point a file never aborts the batch: read failures and
    /// model-call failures are recorded in that file's own result record
    /// and processing continues with the next file.
    pub async fn process_folder(&self, folder: &Path) -> Result<BatchSummary, PipelineError> {
        if !folder.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Folder not found: {}",
                folder.display()
            )));
        }

        let mut text_files: Vec<PathBuf> = fs::read_dir(folder)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == "txt")
            })
            .collect();
        text_files.sort();

        if text_files.is_empty() {
            return Err(PipelineError::Validation(format!(
                "No .txt files found in {}",
                folder.display()
            )));
        }

        let results_dir = folder.join("results");
        let mut processed = 0;

        for text_file in &text_files {
            info!(file = %text_file.display(), "processing batch file");
            let payload = self.analyze_file(text_file).await;

            let stem = text_file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("file_{}", processed));
            let output_path = results_dir.join(format!("{}.json", stem));

            write_result_json(&output_path, &payload)?;
            processed += 1;
        }

        info!(processed, dir = %results_dir.display(), "batch complete");

        Ok(BatchSummary {
            processed_files: processed,
            results_directory: results_dir,
        })
    }

    /// Run one file through the pipeline, mapping every failure mode into
    /// the result record rather than an error.
    async fn analyze_file(&self, text_file: &Path) -> serde_json::Value {
        let raw_text = match fs::read_to_string(text_file) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %text_file.display(), error = %e, "failed to read batch file");
                return json!({
                    "text": null,
                    "bias": BiasValue::Failed(e.to_string()),
                    "confidence": null,
                    "reasoning": null,
                    "raw_output": null,
                });
            }
        };

        let mut request = AnalysisRequest::new(raw_text.clone(), self.model_name.clone())
            .with_max_words(self.max_words);
        if let Some(template) = &self.prompt_template {
            request = request.with_template(template.clone());
        }

        // Batch inputs are always plain text files; an empty file surfaces
        // as a validation record instead of aborting the batch
        let result = match self.analyzer.analyze_plain_text(&raw_text, &request).await {
            Ok(report) => report.result,
            Err(e) => {
                warn!(file = %text_file.display(), error = %e, "batch file failed");
                biaslens_domain::BiasResult::sentinel(BiasValue::Failed(e.to_string()))
            }
        };

        json!({
            "text": raw_text,
            "bias": result.bias,
            "confidence": result.confidence,
            "reasoning": result.reasoning,
            "raw_output": result.raw_output,
        })
    }
}

fn write_result_json(output_path: &Path, payload: &serde_json::Value) -> Result<(), PipelineError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut contents = serde_json::to_string_pretty(payload)?;
    contents.push('\n');
    fs::write(output_path, contents)?;
    Ok(())
}
