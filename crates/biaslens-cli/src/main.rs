//! BiasLens CLI - estimate the political bias of text, HTML, or URLs.

use biaslens_cli::{commands, Cli, Command, Formatter, OutputFormat};
use biaslens_pipeline::{AnalyzerConfig, PipelineError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> biaslens_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            AnalyzerConfig::from_toml(&contents).map_err(PipelineError::Config)?
        }
        None => AnalyzerConfig::default(),
    };

    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Text);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, config, &formatter).await?,
        Command::Batch(args) => commands::execute_batch(args, config, &formatter).await?,
    }

    Ok(())
}
