//! BiasLens Analysis Pipeline
//!
//! The prompt-preparation, model-invocation, and response-normalization
//! pipeline.
//!
//! # Architecture
//!
//! ```text
//! raw input → Extractor → Truncator → PromptBuilder → ModelRunner
//!           → ResponseParser → ResultNormalizer → (RunLogger) → BiasResult
//! ```
//!
//! Single-request processing is synchronous and blocking from the caller's
//! point of view: each stage depends on the prior stage's output, and the
//! model invocation is the only suspension point of consequence (bounded by
//! the configured timeout). Batch processing runs files one at a time, in
//! lexicographic order, with at most one model invocation in flight.
//!
//! # Example
//!
//! ```no_run
//! use biaslens_domain::AnalysisRequest;
//! use biaslens_llm::OllamaRunner;
//! use biaslens_pipeline::{Analyzer, AnalyzerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let runner = OllamaRunner::new("mistral");
//! let analyzer = Analyzer::new(runner, AnalyzerConfig::default())?;
//!
//! let request = AnalysisRequest::new("Paste an article here.", "mistral");
//! let report = analyzer.analyze(&request).await?;
//!
//! println!("bias: {}", report.result.bias);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod batch;
mod config;
mod error;
pub mod normalize;
pub mod parser;
pub mod prompt;
pub mod runlog;

pub use analyzer::{AnalysisReport, Analyzer};
pub use batch::{BatchCoordinator, BatchSummary};
pub use config::AnalyzerConfig;
pub use error::PipelineError;
