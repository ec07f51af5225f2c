//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::load_template;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use biaslens_domain::{AnalysisRequest, ModelRunner};
use biaslens_llm::{ApiRunner, OllamaRunner};
use biaslens_pipeline::{Analyzer, AnalyzerConfig};
use std::fs;
use std::io::Read;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: AnalyzerConfig,
    formatter: &Formatter,
) -> Result<()> {
    let raw_input = read_input(&args)?;

    let mut request =
        AnalysisRequest::new(raw_input, args.model.clone()).with_max_words(args.max_words);
    if let Some(template) = load_template(args.template_file.as_deref())? {
        request = request.with_template(template);
    }

    // The two backends are mutually exclusive; pick one up front
    if args.remote {
        let runner = ApiRunner::from_env(&args.model)?;
        run_and_render(runner, config, &request, formatter).await
    } else {
        let runner = OllamaRunner::new(&args.model);
        run_and_render(runner, config, &request, formatter).await
    }
}

async fn run_and_render<R: ModelRunner>(
    runner: R,
    config: AnalyzerConfig,
    request: &AnalysisRequest,
    formatter: &Formatter,
) -> Result<()> {
    let analyzer = Analyzer::new(runner, config)?;
    let report = analyzer.analyze(request).await?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = &args.file {
        Ok(fs::read_to_string(file_path)?)
    } else if let Some(input) = &args.input {
        Ok(input.clone())
    } else {
        Err(CliError::InvalidInput(
            "Provide input text, --file, or --stdin".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: Option<&str>) -> AnalyzeArgs {
        AnalyzeArgs {
            input: input.map(str::to_string),
            file: None,
            stdin: false,
            model: "mistral".to_string(),
            max_words: 200,
            template_file: None,
            remote: false,
        }
    }

    #[test]
    fn test_read_input_prefers_positional() {
        let input = read_input(&args(Some("inline text"))).unwrap();
        assert_eq!(input, "inline text");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("article.txt");
        fs::write(&path, "file text").unwrap();

        let mut a = args(None);
        a.file = Some(path.to_string_lossy().into_owned());
        assert_eq!(read_input(&a).unwrap(), "file text");
    }

    #[test]
    fn test_missing_input_is_rejected() {
        let result = read_input(&args(None));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
