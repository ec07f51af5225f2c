//! End-to-end pipeline tests using the mock model backend.

use biaslens_domain::{AnalysisRequest, BiasValue};
use biaslens_llm::MockRunner;
use biaslens_pipeline::{prompt::build_prompt, Analyzer, AnalyzerConfig, BatchCoordinator};
use std::fs;

fn test_config(dir: &std::path::Path) -> AnalyzerConfig {
    AnalyzerConfig {
        log_path: Some(dir.join("run.log")),
        ..Default::default()
    }
}

#[tokio::test]
async fn full_pipeline_scores_an_article() {
    let dir = tempfile::tempdir().unwrap();
    let runner = MockRunner::new(
        r#"The verdict: {"bias": "right", "confidence": 0.7, "reasoning": "Framing favors one side."} done."#,
    );
    let analyzer = Analyzer::new(runner, test_config(dir.path())).unwrap();

    let request = AnalysisRequest::new("Senator wants lower taxes, growth at all costs.", "mistral");
    let report = analyzer.analyze(&request).await.unwrap();

    // Lenient parse recovers the object despite the surrounding prose
    assert_eq!(report.result.bias, BiasValue::Score(1.0));
    assert_eq!(
        report.result.reasoning.as_deref(),
        Some("Framing favors one side.")
    );

    // The run log captured all three sections
    let log = fs::read_to_string(dir.path().join("run.log")).unwrap();
    assert!(log.contains("=== Prompt ==="));
    assert!(log.contains("=== Raw Output ==="));
    assert!(log.contains("=== Parsed JSON ==="));
    assert!(log.contains("\"bias\": \"right\""));
}

#[tokio::test]
async fn truncation_bounds_the_prompt_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let analyzer = Analyzer::new(MockRunner::default(), test_config(dir.path())).unwrap();

    let text = "word ".repeat(300);
    let request = AnalysisRequest::new(text, "mistral").with_max_words(200);
    let report = analyzer.analyze(&request).await.unwrap();

    assert_eq!(report.prompt.matches("word").count(), 200);
    assert_eq!(report.truncation.original_word_count, 300);
    assert_eq!(report.truncation.words_cut, 100);
}

#[tokio::test]
async fn custom_template_delimiter_convention_is_fixed() {
    let prompt = build_prompt(Some("Analyze this:"), "hello world");
    assert_eq!(prompt, "Analyze this:\n\nText:\n\"\"\"\nhello world\n\"\"\"");
}

#[tokio::test]
async fn unparseable_output_reports_unknown_with_raw_text() {
    let dir = tempfile::tempdir().unwrap();
    let runner = MockRunner::new("no braces here");
    let analyzer = Analyzer::new(runner, test_config(dir.path())).unwrap();

    let request = AnalysisRequest::new("some text", "mistral");
    let report = analyzer.analyze(&request).await.unwrap();

    assert_eq!(report.result.bias, BiasValue::Unknown);
    assert_eq!(report.result.raw_output.as_deref(), Some("no braces here"));

    // Sentinel encoding on the wire
    let json = serde_json::to_value(&report.result).unwrap();
    assert_eq!(json["bias"], "unknown");
}

#[tokio::test]
async fn batch_writes_one_result_per_input_file() {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in [
        ("alpha", "First article body."),
        ("beta", "Second article body."),
        ("gamma", "Third article body."),
    ] {
        fs::write(dir.path().join(format!("{}.txt", name)), body).unwrap();
    }

    let runner = MockRunner::new(r#"{"bias": 0.2, "confidence": "medium", "reasoning": "mild"}"#);
    let analyzer = Analyzer::new(runner, test_config(dir.path())).unwrap();
    let coordinator = BatchCoordinator::new(analyzer, "mistral", 200);

    let summary = coordinator.process_folder(dir.path()).await.unwrap();
    assert_eq!(summary.processed_files, 3);
    assert!(summary.results_directory.is_dir());

    for name in ["alpha", "beta", "gamma"] {
        let path = summary.results_directory.join(format!("{}.json", name));
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["bias"], 0.2);
        assert_eq!(value["confidence"], "medium");
        assert_eq!(value["reasoning"], "mild");
        assert!(value["text"].as_str().unwrap().contains("article body"));
        assert!(value["raw_output"].is_string());
    }
}
