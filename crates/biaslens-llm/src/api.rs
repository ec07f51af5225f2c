//! Remote chat-completions backend
//!
//! Alternate backend to the local Ollama runner (mutually exclusive with
//! it). Sends the prompt as a single user message to a chat-completions
//! endpoint and treats the assistant message content as the raw model
//! output, so the rest of the pipeline is identical for both backends.

use crate::LlmError;
use async_trait::async_trait;
use biaslens_domain::{ModelOutcome, ModelRunner, RawModelOutput};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

/// Environment variable holding the API bearer token.
pub const API_KEY_ENV: &str = "BIASLENS_API_KEY";

/// Default chat-completions endpoint.
pub const DEFAULT_API_URL: &str = "https://api.mistral.ai/v1/chat/completions";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Remote chat-completions model runner.
pub struct ApiRunner {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ApiRunner {
    /// Create a runner with an explicit endpoint and key.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| LlmError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
        })
    }

    /// Create a runner against the default endpoint, reading the bearer
    /// token from `BIASLENS_API_KEY`.
    ///
    /// A missing credential is a fatal configuration error for this path.
    pub fn from_env(model: impl Into<String>) -> Result<Self, LlmError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| LlmError::MissingCredential(API_KEY_ENV))?;
        Self::new(DEFAULT_API_URL, model, api_key)
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[async_trait]
impl ModelRunner for ApiRunner {
    async fn run(&self, prompt: &str, timeout: Duration) -> ModelOutcome {
        let start = Instant::now();

        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .timeout(timeout)
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return ModelOutcome::TimedOut,
            Err(e) => return ModelOutcome::Failed(format!("request failed: {}", e)),
        };

        if !response.status().is_success() {
            return ModelOutcome::Failed(format!("HTTP {}", response.status()));
        }

        let parsed: ChatResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) if e.is_timeout() => return ModelOutcome::TimedOut,
            Err(e) => return ModelOutcome::Failed(format!("invalid response body: {}", e)),
        };

        let content = match parsed.choices.into_iter().next() {
            Some(choice) => choice.message.content,
            None => return ModelOutcome::Failed("response contained no choices".to_string()),
        };

        debug!(model = %self.model, output_len = content.len(), "chat completion received");

        ModelOutcome::Completed(RawModelOutput {
            stdout: content.trim().to_string(),
            exit_status: None,
            duration: start.elapsed(),
        })
    }
}
