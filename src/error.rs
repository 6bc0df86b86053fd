//! Error handling for the resume analyzer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeAnalyzerError>;

impl ResumeAnalyzerError {
    /// Whether the error comes from the caller-supplied inputs rather than
    /// the environment (files, config, output).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ResumeAnalyzerError::InvalidInput(_)
                | ResumeAnalyzerError::UnsupportedFormat(_)
                | ResumeAnalyzerError::PdfExtraction(_)
                | ResumeAnalyzerError::DocxExtraction(_)
        )
    }
}
