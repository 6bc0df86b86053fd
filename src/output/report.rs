//! Report structures wrapping an analysis with its presentation metadata

use crate::processing::analyzer::AnalysisReport;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An analysis plus everything needed to present or save it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    pub analysis: AnalysisReport,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Local>,
    pub analyzer_version: String,
    /// Where the resume text came from (file path)
    pub resume_source: String,
    /// Where the job description came from (file path or inline text)
    pub job_source: String,
}

/// Coarse reading of the similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.75 => ScoreBand::Excellent,
            s if s >= 0.5 => ScoreBand::Good,
            s if s >= 0.25 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Poor",
        }
    }
}

impl ReportDocument {
    pub fn new(
        analysis: AnalysisReport,
        resume_source: impl Into<String>,
        job_source: impl Into<String>,
    ) -> Self {
        Self {
            analysis,
            metadata: ReportMetadata {
                generated_at: Local::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_source: resume_source.into(),
                job_source: job_source.into(),
            },
        }
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.analysis.similarity_score)
    }

    /// Resume keywords joined with ", " in sorted order
    pub fn keyword_list(&self) -> String {
        join_terms(self.analysis.candidate_terms.iter())
    }

    pub fn missing_keyword_list(&self) -> String {
        join_terms(self.analysis.missing_terms.iter())
    }
}

fn join_terms<'a>(terms: impl Iterator<Item = &'a String>) -> String {
    terms.map(String::as_str).collect::<Vec<_>>().join(", ")
}
