//! Error types for the analysis pipeline
//!
//! Only validation and extraction failures abort a request. Everything that
//! happens at or after the model call — timeout, invocation failure,
//! unparseable output — is encoded as sentinel data in the returned
//! `BiasResult`, never raised here.

use biaslens_extract::ExtractError;
use thiserror::Error;

/// Errors that can abort a single analysis or batch run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Invalid request or folder: reported to the caller, never retried,
    /// and never sent to the model
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network or parse failure while resolving a URL input
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// Filesystem error while reading batch inputs or writing results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while writing a result record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
