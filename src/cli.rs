//! CLI interface for the resume analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Compare a resume with a job description")]
#[command(long_about = "Report the keywords a job description asks for that a resume lacks, and a word-overlap similarity score")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOCX, TXT, MD)
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description pasted as text
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, text, markdown, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save the report; without a value the configured file name is used
        #[arg(short, long, num_args = 0..=1)]
        save: Option<Option<PathBuf>>,

        /// Print the beginning of both extracted texts
        #[arg(long)]
        preview: bool,
    },

    /// List the keywords extracted from one document
    Keywords {
        /// Path to the document (PDF, DOCX, TXT, MD)
        file: PathBuf,

        /// Show the part-of-speech tag of every keyword
        #[arg(long)]
        tags: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "text" | "txt" => Ok(OutputFormat::Text),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, text, markdown, json",
            format
        )),
    }
}

/// Shorten text to at most `max_chars` characters, cutting at a word boundary.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let truncated = &text[..cut];
    let end = truncated.rfind(char::is_whitespace).unwrap_or(cut);
    format!("{}...", truncated[..end].trim_end())
}
