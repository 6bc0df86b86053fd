//! Integration tests for the resume analyzer

use resume_analyzer::input::manager::{DocumentSource, InputManager};
use resume_analyzer::output::formatter::save_report_to_file;
use resume_analyzer::output::{ReportDocument, ReportGenerator};
use resume_analyzer::config::OutputFormat;
use resume_analyzer::{AnalysisEngine, AnalysisRequest, ResumeAnalyzerError};
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();

    let text = manager.extract_text(&fixture("sample_resume.txt")).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();

    let text = manager.extract_text(&fixture("sample_resume.md")).await.unwrap();

    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = fixture("sample_resume.txt");

    let text1 = manager.extract_text(&path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(&path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);

    manager.extract_text(&fixture("sample_resume.txt")).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();

    let result = manager.extract_text(&fixture("unsupported.xyz")).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_text_extraction_from_docx() {
    let mut manager = InputManager::new();

    let text = manager.extract_text(&fixture("resume.docx")).await.unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Jane Roe");
    assert_eq!(lines[1], "Platform Engineer");
    assert!(lines.contains(&"Backend engineer with a focus on payment systems."));
    assert_eq!(lines.last(), Some(&"Rust, Kafka, PostgreSQL, Docker"));
}

#[tokio::test]
async fn test_corrupt_docx_is_an_extraction_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("resume.docx");
    std::fs::write(&path, "not a zip archive").unwrap();

    let result = InputManager::new().extract_text(&path).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::DocxExtraction(_))));
}

#[tokio::test]
async fn test_docx_resume_against_pasted_job() {
    let mut manager = InputManager::new();
    let request = manager
        .load_request(
            &DocumentSource::File(fixture("resume.docx")),
            &DocumentSource::Pasted("We need a Rust engineer who knows Kafka and Terraform.".into()),
        )
        .await
        .unwrap();

    let analysis = AnalysisEngine::default().analyze_request(&request).unwrap();

    assert!(analysis.missing_terms.contains("Terraform"));
    assert!(!analysis.missing_terms.contains("Kafka"));
    assert!(!analysis.missing_terms.contains("Rust"));
}

#[tokio::test]
async fn test_blank_pasted_job_is_rejected() {
    let mut manager = InputManager::new();
    let request = manager
        .load_request(
            &DocumentSource::File(fixture("sample_resume.txt")),
            &DocumentSource::Pasted("  \n ".into()),
        )
        .await
        .unwrap();

    assert!(request.target_text.is_none());
    let result = AnalysisEngine::default().analyze_request(&request);
    assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
}

#[test]
fn test_document_source_descriptions() {
    assert_eq!(
        DocumentSource::File(PathBuf::from("cv.docx")).describe(),
        "cv.docx"
    );
    assert_eq!(DocumentSource::Pasted("Rust".into()).describe(), "pasted text");
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();

    let result = manager.extract_text(&fixture("nonexistent.txt")).await;
    assert!(matches!(result, Err(ResumeAnalyzerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_end_to_end_analysis_and_saved_report() {
    let mut manager = InputManager::new();
    let resume = manager.extract_text(&fixture("sample_resume.txt")).await.unwrap();
    let job = manager.extract_text(&fixture("sample_job.txt")).await.unwrap();

    let engine = AnalysisEngine::default();
    let analysis = engine
        .analyze_request(&AnalysisRequest::new(resume, job))
        .unwrap();

    assert!(analysis.missing_terms.contains("Kafka"));
    assert!(analysis.missing_terms.contains("Terraform"));
    assert!(!analysis.missing_terms.contains("Rust"));
    assert!(!analysis.missing_terms.contains("PostgreSQL"));
    assert!(analysis.missing_terms.is_subset(&analysis.target_terms));
    assert!(analysis.similarity_score > 0.0 && analysis.similarity_score < 1.0);

    let report = ReportDocument::new(analysis, "sample_resume.txt", "sample_job.txt");
    let generator = ReportGenerator::with_options(false, true, true);
    let content = generator
        .generate_file_report(&report, OutputFormat::Text)
        .unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("reports").join("resume_analysis_report.txt");
    save_report_to_file(&content, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("Resume Analysis Report\n\nSimilarity Score: "));
    assert!(saved.contains("Missing Keywords:\n"));
    assert!(saved.contains("Kafka"));
}
