//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// BiasLens - Estimate the political bias of text, HTML, or URLs.
#[derive(Debug, Parser)]
#[command(name = "biaslens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pipeline configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (bias value only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single piece of text, an HTML snippet, or a URL
    Analyze(AnalyzeArgs),

    /// Analyze every .txt file in a folder
    Batch(BatchArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Input text, HTML, or URL (omit to use --file or --stdin)
    pub input: Option<String>,

    /// Read the input from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Read the input from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Model short name to invoke
    #[arg(short, long, default_value = "mistral")]
    pub model: String,

    /// Maximum number of words sent to the model
    #[arg(short = 'w', long, default_value = "200")]
    pub max_words: usize,

    /// File holding a custom prompt template ({text} marks the insertion
    /// point)
    #[arg(short, long)]
    pub template_file: Option<String>,

    /// Use the remote chat-completions backend instead of the local runner
    /// (requires BIASLENS_API_KEY)
    #[arg(long)]
    pub remote: bool,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Folder containing .txt files to analyze
    pub folder: String,

    /// Model short name to invoke
    #[arg(short, long, default_value = "mistral")]
    pub model: String,

    /// Maximum number of words sent to the model per file
    #[arg(short = 'w', long, default_value = "200")]
    pub max_words: usize,

    /// File holding a custom prompt template
    #[arg(short, long)]
    pub template_file: Option<String>,

    /// Use the remote chat-completions backend instead of the local runner
    #[arg(long)]
    pub remote: bool,
}
