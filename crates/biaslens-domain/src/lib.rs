//! BiasLens Domain Layer
//!
//! Core value objects and trait seams shared by every other crate.
//!
//! ## Key Concepts
//!
//! - **AnalysisRequest**: one user action, immutable once constructed
//! - **BiasValue**: tagged union over a clamped numeric score and the
//!   sentinel outcomes ("unknown", "timeout", "error: ...")
//! - **BiasResult**: the canonical record returned to every caller
//! - **ModelRunner**: the seam between the pipeline and the model backends;
//!   invocation outcomes are data, never errors
//!
//! Infrastructure implementations (HTTP, subprocess, HTML parsing) live in
//! the other crates; this one holds pure types plus their serde encodings.

#![warn(missing_docs)]

pub mod bias;
pub mod metadata;
pub mod request;
pub mod runner;

// Re-exports for convenience
pub use bias::{BiasResult, BiasValue};
pub use metadata::{ExtractionMetadata, SourceKind, TruncationMetadata};
pub use request::{AnalysisRequest, DEFAULT_MAX_WORDS};
pub use runner::{ModelOutcome, ModelRunner, RawModelOutput, DEFAULT_MODEL_TIMEOUT};
