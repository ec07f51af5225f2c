//! Model invocation seam
//!
//! The pipeline talks to model backends through the `ModelRunner` trait.
//! Per the non-throwing policy, every invocation outcome — completion,
//! timeout, failure — is encoded as a `ModelOutcome` variant rather than an
//! error, so callers never need exception handling around the model call.

use async_trait::async_trait;
use std::time::Duration;

/// Default time allotted to one model invocation.
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(240);

/// Raw capture of one completed model invocation.
#[derive(Debug, Clone)]
pub struct RawModelOutput {
    /// Entire stdout (or response body), trimmed
    pub stdout: String,

    /// Process exit code when one exists; never used to classify
    /// success/failure
    pub exit_status: Option<i32>,

    /// Wall-clock time the invocation took
    pub duration: Duration,
}

/// Outcome of one model invocation.
#[derive(Debug, Clone)]
pub enum ModelOutcome {
    /// The model produced output within the allotted time
    Completed(RawModelOutput),
    /// The model exceeded the allotted time and was aborted
    TimedOut,
    /// The invocation failed before or during output capture
    Failed(String),
}

impl ModelOutcome {
    /// The captured output, when the invocation completed.
    pub fn output(&self) -> Option<&RawModelOutput> {
        match self {
            ModelOutcome::Completed(out) => Some(out),
            _ => None,
        }
    }
}

/// A model backend that turns a prompt into raw text output.
///
/// Implementations must enforce `timeout` themselves and report it as
/// `ModelOutcome::TimedOut`; once dispatched, a call either completes,
/// times out, or fails — there is no cancellation API.
#[async_trait]
pub trait ModelRunner: Send + Sync {
    /// Run the model against `prompt`, bounded by `timeout`.
    async fn run(&self, prompt: &str, timeout: Duration) -> ModelOutcome;
}
