//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{Event, Parser, Tag};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use zip::ZipArchive;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;

        // scanned PDFs parse fine but carry no text layer
        if text.trim().is_empty() {
            return Err(ResumeAnalyzerError::PdfExtraction(format!(
                "No extractable text in PDF '{}'",
                path.display()
            )));
        }
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = docx_to_text(&bytes).map_err(|e| {
            ResumeAnalyzerError::DocxExtraction(format!(
                "Failed to extract text from DOCX '{}': {}",
                path.display(),
                e
            ))
        })?;

        if text.trim().is_empty() {
            return Err(ResumeAnalyzerError::DocxExtraction(format!(
                "No extractable text in DOCX '{}'",
                path.display()
            )));
        }
        Ok(text)
    }
}

#[derive(Error, Debug)]
pub enum DocxReadError {
    #[error("not a DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("cannot read document part: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Paragraph text of a DOCX file, one paragraph per line.
///
/// Runs are concatenated inside a paragraph, `<w:tab/>` becomes a tab and
/// `<w:br/>` a line break. Paragraphs inside tables are included.
pub fn docx_to_text(bytes: &[u8]) -> std::result::Result<String, DocxReadError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            XmlEvent::Start(e) => match e.local_name().as_ref() {
                b"p" => current.clear(),
                b"t" => in_text = true,
                _ => {}
            },
            XmlEvent::Empty(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(String::new()),
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                _ => {}
            },
            XmlEvent::End(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                b"t" => in_text = false,
                _ => {}
            },
            XmlEvent::Text(e) if in_text => current.push_str(&e.unescape()?),
            XmlEvent::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path).await?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(markdown_to_text(&markdown_content))
    }
}

/// Strip Markdown syntax, keeping one block per line.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph | Tag::Heading(..) | Tag::Item | Tag::CodeBlock(_)) => {
                text.push('\n')
            }
            _ => {}
        }
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
