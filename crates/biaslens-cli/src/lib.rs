//! BiasLens CLI library.
//!
//! Exposes the command definitions, output formatting, and command
//! implementations used by the `biaslens` binary.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
