//! Output formatters: console, plain text, Markdown and JSON

use crate::config::OutputFormat;
use crate::error::{Result, ResumeAnalyzerError};
use crate::output::report::{ReportDocument, ScoreBand};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering a report in one output format
pub trait OutputFormatter {
    fn format_report(&self, report: &ReportDocument) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal summary
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// The plain-text layout used for downloaded reports
pub struct TextFormatter;

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that picks the formatter registered for each format
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.bold().underline())
        } else {
            format!("\n{}\n{}\n", title, "=".repeat(title.chars().count()))
        }
    }

    fn band_color(band: ScoreBand) -> Color {
        match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::Cyan,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ReportDocument) -> Result<String> {
        let analysis = &report.analysis;
        let band = report.score_band();
        let mut output = String::new();

        output.push_str(&self.format_header("Analysis Report"));
        output.push_str(&format!(
            "Similarity Score: {} [{}]\n",
            self.colorize(
                &format!("{:.2}%", analysis.similarity_percentage()),
                Self::band_color(band)
            ),
            band.label()
        ));
        output.push_str(&format!(
            "Shared vocabulary: {} of {} distinct words\n",
            analysis.similarity_details.shared_tokens, analysis.similarity_details.vocabulary_size
        ));

        output.push_str(&self.format_header(&format!(
            "Extracted Keywords from Resume ({})",
            analysis.candidate_terms.len()
        )));
        output.push_str(&report.keyword_list());
        output.push('\n');

        output.push_str(&self.format_header(&format!(
            "Missing Keywords from Job Description ({})",
            analysis.missing_terms.len()
        )));
        if analysis.missing_terms.is_empty() {
            output.push_str(&self.colorize("None, every job keyword appears in the resume", Color::Green));
        } else {
            output.push_str(&self.colorize(&report.missing_keyword_list(), Color::Red));
        }
        output.push('\n');

        if !analysis.warnings.is_empty() {
            output.push('\n');
            for warning in &analysis.warnings {
                output.push_str(&format!("{} {}\n", self.colorize("warning:", Color::Yellow), warning));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &ReportDocument) -> Result<String> {
        Ok(format!(
            "Resume Analysis Report\n\nSimilarity Score: {:.2}%\n\nExtracted Keywords:\n{}\n\nMissing Keywords:\n{}\n",
            report.analysis.similarity_percentage(),
            report.keyword_list(),
            report.missing_keyword_list()
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn term_bullets(terms: &std::collections::BTreeSet<String>) -> String {
        if terms.is_empty() {
            return "_None_\n".to_string();
        }
        terms.iter().map(|t| format!("- {}\n", t)).collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ReportDocument) -> Result<String> {
        let analysis = &report.analysis;
        let mut output = String::new();

        output.push_str("# Resume Analysis Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "_Generated {} by resume-analyzer {}_\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S"),
                report.metadata.analyzer_version
            ));
            output.push_str(&format!("- **Resume:** {}\n", report.metadata.resume_source));
            output.push_str(&format!("- **Job description:** {}\n\n", report.metadata.job_source));
        }

        output.push_str(&format!(
            "**Similarity Score:** {:.2}% ({})\n\n",
            analysis.similarity_percentage(),
            report.score_band().label()
        ));

        output.push_str(&format!("## Extracted Keywords ({})\n\n", analysis.candidate_terms.len()));
        output.push_str(&Self::term_bullets(&analysis.candidate_terms));

        output.push_str(&format!("\n## Missing Keywords ({})\n\n", analysis.missing_terms.len()));
        output.push_str(&Self::term_bullets(&analysis.missing_terms));

        if !analysis.warnings.is_empty() {
            output.push_str("\n## Warnings\n\n");
            for warning in &analysis.warnings {
                output.push_str(&format!("- {}\n", warning));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ReportDocument) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors)),
                Box::new(TextFormatter),
                Box::new(MarkdownFormatter::new(include_metadata)),
                Box::new(JsonFormatter::new(pretty_json)),
            ],
        }
    }

    fn formatter(&self, format: OutputFormat) -> Result<&dyn OutputFormatter> {
        self.formatters
            .iter()
            .find(|f| f.supports_format() == format)
            .map(|f| &**f)
            .ok_or_else(|| {
                ResumeAnalyzerError::OutputFormatting(format!("No formatter for {:?} output", format))
            })
    }

    pub fn generate_report(&self, report: &ReportDocument, format: OutputFormat) -> Result<String> {
        self.formatter(format)?.format_report(report)
    }

    /// Render for saving to disk. Console output is saved in the plain text
    /// layout so the file carries no terminal escape codes.
    pub fn generate_file_report(&self, report: &ReportDocument, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.generate_report(report, OutputFormat::Text),
            other => self.generate_report(report, other),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Report file name with the extension matching `format`.
pub fn suggest_filename(format: OutputFormat, base_name: &str) -> String {
    let stem = Path::new(base_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console | OutputFormat::Text => format!("{}.txt", stem),
        OutputFormat::Markdown => format!("{}.md", stem),
        OutputFormat::Json => format!("{}.json", stem),
    }
}
