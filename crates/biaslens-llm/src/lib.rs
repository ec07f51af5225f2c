//! BiasLens Model Backends
//!
//! Implementations of the `ModelRunner` trait from `biaslens-domain`.
//!
//! # Runners
//!
//! - [`OllamaRunner`]: local model via the `ollama` CLI (prompt on stdin,
//!   whole stdout captured)
//! - [`ApiRunner`]: remote chat-completions HTTP endpoint
//! - [`MockRunner`]: deterministic mock for testing
//!
//! All runners report timeouts and invocation failures as `ModelOutcome`
//! variants, never as errors; the only fallible operation in this crate is
//! runner construction.
//!
//! # Examples
//!
//! ```
//! use biaslens_llm::MockRunner;
//! use biaslens_domain::{ModelRunner, DEFAULT_MODEL_TIMEOUT};
//!
//! # async fn example() {
//! let runner = MockRunner::new(r#"{"bias": 0.0}"#);
//! let outcome = runner.run("test prompt", DEFAULT_MODEL_TIMEOUT).await;
//! assert!(outcome.output().is_some());
//! # }
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod ollama;

use async_trait::async_trait;
use biaslens_domain::{ModelOutcome, ModelRunner, RawModelOutput};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub use api::ApiRunner;
pub use ollama::OllamaRunner;

/// Errors that can occur while constructing a model runner.
#[derive(Error, Debug)]
pub enum LlmError {
    /// A required credential environment variable is not set
    #[error("Missing credential: environment variable {0} is not set")]
    MissingCredential(&'static str),

    /// Failed to build the HTTP client
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Outcome a [`MockRunner`] should produce for a given prompt.
#[derive(Debug, Clone)]
enum MockBehavior {
    Reply(String),
    Timeout,
    Fail(String),
}

/// Mock model runner for deterministic testing.
///
/// Returns pre-configured outcomes without spawning processes or making
/// network calls.
///
/// # Examples
///
/// ```
/// use biaslens_llm::MockRunner;
///
/// let mut runner = MockRunner::new("default reply");
/// runner.add_response("prompt1", "reply1");
/// runner.add_timeout("slow prompt");
/// runner.add_failure("bad prompt", "model binary missing");
/// ```
#[derive(Debug, Clone)]
pub struct MockRunner {
    default_response: String,
    behaviors: Arc<Mutex<HashMap<String, MockBehavior>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockRunner {
    /// Create a mock that replies with a fixed string for all prompts.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            behaviors: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Reply with `response` for this exact prompt.
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.behaviors
            .lock()
            .unwrap()
            .insert(prompt.into(), MockBehavior::Reply(response.into()));
    }

    /// Report a timeout for this exact prompt.
    pub fn add_timeout(&mut self, prompt: impl Into<String>) {
        self.behaviors
            .lock()
            .unwrap()
            .insert(prompt.into(), MockBehavior::Timeout);
    }

    /// Report an invocation failure for this exact prompt.
    pub fn add_failure(&mut self, prompt: impl Into<String>, cause: impl Into<String>) {
        self.behaviors
            .lock()
            .unwrap()
            .insert(prompt.into(), MockBehavior::Fail(cause.into()));
    }

    /// Number of times `run` was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new(r#"{"bias": 0.0, "confidence": 1.0, "reasoning": "mock"}"#)
    }
}

#[async_trait]
impl ModelRunner for MockRunner {
    async fn run(&self, prompt: &str, _timeout: Duration) -> ModelOutcome {
        *self.call_count.lock().unwrap() += 1;

        let behavior = self.behaviors.lock().unwrap().get(prompt).cloned();
        let stdout = match behavior {
            Some(MockBehavior::Reply(text)) => text,
            Some(MockBehavior::Timeout) => return ModelOutcome::TimedOut,
            Some(MockBehavior::Fail(cause)) => return ModelOutcome::Failed(cause),
            None => self.default_response.clone(),
        };

        ModelOutcome::Completed(RawModelOutput {
            stdout,
            exit_status: Some(0),
            duration: Duration::from_millis(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biaslens_domain::DEFAULT_MODEL_TIMEOUT;

    #[tokio::test]
    async fn test_mock_default_response() {
        let runner = MockRunner::new("fixed reply");
        let outcome = runner.run("any prompt", DEFAULT_MODEL_TIMEOUT).await;
        assert_eq!(outcome.output().unwrap().stdout, "fixed reply");
    }

    #[tokio::test]
    async fn test_mock_specific_responses() {
        let mut runner = MockRunner::new("default");
        runner.add_response("hello", "world");

        let outcome = runner.run("hello", DEFAULT_MODEL_TIMEOUT).await;
        assert_eq!(outcome.output().unwrap().stdout, "world");

        let outcome = runner.run("other", DEFAULT_MODEL_TIMEOUT).await;
        assert_eq!(outcome.output().unwrap().stdout, "default");
    }

    #[tokio::test]
    async fn test_mock_timeout_and_failure() {
        let mut runner = MockRunner::new("default");
        runner.add_timeout("slow");
        runner.add_failure("broken", "no such model");

        assert!(matches!(
            runner.run("slow", DEFAULT_MODEL_TIMEOUT).await,
            ModelOutcome::TimedOut
        ));
        match runner.run("broken", DEFAULT_MODEL_TIMEOUT).await {
            ModelOutcome::Failed(cause) => assert_eq!(cause, "no such model"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_call_count_shared_across_clones() {
        let runner = MockRunner::new("reply");
        let clone = runner.clone();

        runner.run("a", DEFAULT_MODEL_TIMEOUT).await;
        clone.run("b", DEFAULT_MODEL_TIMEOUT).await;

        assert_eq!(runner.call_count(), 2);
        assert_eq!(clone.call_count(), 2);
    }
}
