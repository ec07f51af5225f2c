//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::commands::load_template;
use crate::error::Result;
use crate::output::Formatter;
use biaslens_domain::ModelRunner;
use biaslens_llm::{ApiRunner, OllamaRunner};
use biaslens_pipeline::{Analyzer, AnalyzerConfig, BatchCoordinator};
use std::path::Path;

/// Execute the batch command.
pub async fn execute_batch(
    args: BatchArgs,
    config: AnalyzerConfig,
    formatter: &Formatter,
) -> Result<()> {
    let template = load_template(args.template_file.as_deref())?;

    if args.remote {
        let runner = ApiRunner::from_env(&args.model)?;
        run_folder(runner, config, &args, template, formatter).await
    } else {
        let runner = OllamaRunner::new(&args.model);
        run_folder(runner, config, &args, template, formatter).await
    }
}

async fn run_folder<R: ModelRunner>(
    runner: R,
    config: AnalyzerConfig,
    args: &BatchArgs,
    template: Option<String>,
    formatter: &Formatter,
) -> Result<()> {
    let analyzer = Analyzer::new(runner, config)?;

    let mut coordinator = BatchCoordinator::new(analyzer, &args.model, args.max_words);
    if let Some(template) = template {
        coordinator = coordinator.with_template(template);
    }

    let summary = coordinator.process_folder(Path::new(&args.folder)).await?;
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
