//! Turns the resume and job description inputs into analysis text

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    DocxExtractor, MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::processing::analyzer::AnalysisRequest;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where one side of an analysis comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Pasted(String),
}

impl DocumentSource {
    /// Label used in report metadata.
    pub fn describe(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Pasted(_) => "pasted text".to_string(),
        }
    }
}

/// Reads documents, remembering the text of files already extracted.
pub struct InputManager {
    extracted: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            extracted: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Text of a PDF, DOCX, plain text or Markdown file, chosen by extension.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.extracted.get(path) {
            debug!("Reusing extracted text of {}", path.display());
            return Ok(text.clone());
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput(format!(
                "File has no extension: {}",
                path.display()
            ))
        })?;

        let text = extract_by_type(path, file_type).await?;
        info!(
            "Extracted {} characters of {} from {}",
            text.chars().count(),
            file_type,
            path.display()
        );

        if self.enable_cache {
            self.extracted.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    /// Text of one input. Blank pasted text counts as not provided.
    pub async fn read_source(&mut self, source: &DocumentSource) -> Result<Option<String>> {
        match source {
            DocumentSource::File(path) => self.extract_text(path).await.map(Some),
            DocumentSource::Pasted(text) if text.trim().is_empty() => Ok(None),
            DocumentSource::Pasted(text) => Ok(Some(text.clone())),
        }
    }

    /// Read both inputs into a request. Inputs that were not provided stay
    /// `None`, so the engine rejects the request instead of scoring nothing.
    pub async fn load_request(
        &mut self,
        resume: &DocumentSource,
        job: &DocumentSource,
    ) -> Result<AnalysisRequest> {
        Ok(AnalysisRequest {
            candidate_text: self.read_source(resume).await?,
            target_text: self.read_source(job).await?,
        })
    }

    pub fn clear_cache(&mut self) {
        self.extracted.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.extracted.len()
    }
}

async fn extract_by_type(path: &Path, file_type: FileType) -> Result<String> {
    debug!("Extracting {} text from {}", file_type, path.display());
    match file_type {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Docx => DocxExtractor.extract(path).await,
        FileType::Text => PlainTextExtractor.extract(path).await,
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Unknown => Err(ResumeAnalyzerError::UnsupportedFormat(format!(
            "{}: use a PDF, DOCX, TXT or MD file",
            path.display()
        ))),
    }
}
