//! Local model invocation via the Ollama CLI
//!
//! Spawns `ollama run <model>` as a child process, writes the prompt to its
//! stdin, and captures the entire stdout. The process-spawn-as-RPC contract:
//! only timeout vs. completion matters, the exit code is recorded but never
//! used to classify success.

use async_trait::async_trait;
use biaslens_domain::{ModelOutcome, ModelRunner, RawModelOutput};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Default program used to run local models.
pub const DEFAULT_PROGRAM: &str = "ollama";

/// Runs a named local model through the `ollama` command-line runner.
pub struct OllamaRunner {
    program: String,
    model: String,
}

impl OllamaRunner {
    /// Create a runner for the given model short name (e.g. "mistral").
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            model: model.into(),
        }
    }

    /// Override the runner binary (useful for tests and wrappers).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The model this runner invokes.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ModelRunner for OllamaRunner {
    async fn run(&self, prompt: &str, timeout: Duration) -> ModelOutcome {
        let start = Instant::now();

        let mut command = Command::new(&self.program);
        command
            .arg("run")
            .arg(&self.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            // Dropping the wait future on timeout must abort the child,
            // otherwise the model keeps generating into a dead pipe.
            .kill_on_drop(true);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                return ModelOutcome::Failed(format!(
                    "failed to spawn '{} run {}': {}",
                    self.program, self.model, e
                ));
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(prompt.as_bytes()).await {
                return ModelOutcome::Failed(format!("failed to write prompt: {}", e));
            }
            // Closing stdin signals end of prompt
            drop(stdin);
        }

        debug!(model = %self.model, prompt_len = prompt.len(), "dispatched model invocation");

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Err(_) => {
                warn!(model = %self.model, ?timeout, "model invocation timed out, aborting child");
                ModelOutcome::TimedOut
            }
            Ok(Err(e)) => ModelOutcome::Failed(format!("I/O error capturing output: {}", e)),
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                debug!(
                    model = %self.model,
                    output_len = stdout.len(),
                    exit_status = ?output.status.code(),
                    "model invocation complete"
                );
                ModelOutcome::Completed(RawModelOutput {
                    stdout,
                    exit_status: output.status.code(),
                    duration: start.elapsed(),
                })
            }
        }
    }
}
