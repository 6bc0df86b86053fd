//! Analysis engine combining keyword extraction and similarity scoring

use crate::config::Config;
use crate::error::{Result, ResumeAnalyzerError};
use crate::processing::similarity::{SimilarityBreakdown, SimilarityScorer};
use crate::processing::term_extractor::{TermExtractor, TermSet};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinates the term extractor and the similarity scorer
pub struct AnalysisEngine {
    extractor: TermExtractor,
    scorer: SimilarityScorer,
}

/// Texts handed over by the input layer. A `None` means the document
/// could not be supplied (missing upload, failed extraction).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub candidate_text: Option<String>,
    pub target_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Nouns found in the resume
    pub candidate_terms: TermSet,
    /// Nouns found in the job description
    pub target_terms: TermSet,
    /// Job description terms absent from the resume
    pub missing_terms: TermSet,
    /// Cosine similarity of the full texts (0.0 to 1.0)
    pub similarity_score: f64,
    pub similarity_details: SimilarityBreakdown,
    pub warnings: Vec<AnalysisWarning>,
}

/// Degenerate but valid inputs. These never fail an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisWarning {
    EmptyCandidateText,
    EmptyTargetText,
    NoCandidateTerms,
    NoTargetTerms,
    NoSharedVocabulary,
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            AnalysisWarning::EmptyCandidateText => "resume text is empty",
            AnalysisWarning::EmptyTargetText => "job description text is empty",
            AnalysisWarning::NoCandidateTerms => "no keywords found in the resume",
            AnalysisWarning::NoTargetTerms => "no keywords found in the job description",
            AnalysisWarning::NoSharedVocabulary => {
                "resume and job description share no vocabulary"
            }
        };
        write!(f, "{}", message)
    }
}

impl AnalysisRequest {
    pub fn new(candidate_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            candidate_text: Some(candidate_text.into()),
            target_text: Some(target_text.into()),
        }
    }
}

impl AnalysisReport {
    /// Job description terms that the resume does contain.
    pub fn matched_terms(&self) -> TermSet {
        self.target_terms
            .intersection(&self.candidate_terms)
            .cloned()
            .collect()
    }

    pub fn similarity_percentage(&self) -> f64 {
        self.similarity_score * 100.0
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(TermExtractor::new(), SimilarityScorer::new())
    }
}

static DEFAULT_ENGINE: Lazy<AnalysisEngine> = Lazy::new(AnalysisEngine::default);

/// Analyze a resume against a job description with default settings.
pub fn analyze(candidate_text: &str, target_text: &str) -> AnalysisReport {
    DEFAULT_ENGINE.analyze(candidate_text, target_text)
}

impl AnalysisEngine {
    pub fn new(extractor: TermExtractor, scorer: SimilarityScorer) -> Self {
        Self { extractor, scorer }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TermExtractor::new(),
            SimilarityScorer::from_config(&config.scoring),
        )
    }

    pub fn extractor(&self) -> &TermExtractor {
        &self.extractor
    }

    /// Validate the request and run the analysis.
    pub fn analyze_request(&self, request: &AnalysisRequest) -> Result<AnalysisReport> {
        let candidate = request.candidate_text.as_deref().ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput("resume text is missing".to_string())
        })?;
        let target = request.target_text.as_deref().ok_or_else(|| {
            ResumeAnalyzerError::InvalidInput("job description text is missing".to_string())
        })?;

        Ok(self.analyze(candidate, target))
    }

    pub fn analyze(&self, candidate_text: &str, target_text: &str) -> AnalysisReport {
        info!(
            "Analyzing resume ({} chars) against job description ({} chars)",
            candidate_text.len(),
            target_text.len()
        );

        let target_terms = self.extractor.extract_terms(target_text);
        let candidate_terms = self.extractor.extract_terms(candidate_text);
        let missing_terms: TermSet = target_terms
            .difference(&candidate_terms)
            .cloned()
            .collect();
        let similarity_details = self.scorer.breakdown(candidate_text, target_text);

        let mut warnings = Vec::new();
        if candidate_text.trim().is_empty() {
            warnings.push(AnalysisWarning::EmptyCandidateText);
        } else if candidate_terms.is_empty() {
            warnings.push(AnalysisWarning::NoCandidateTerms);
        }
        if target_text.trim().is_empty() {
            warnings.push(AnalysisWarning::EmptyTargetText);
        } else if target_terms.is_empty() {
            warnings.push(AnalysisWarning::NoTargetTerms);
        }
        if similarity_details.shared_tokens == 0 {
            warnings.push(AnalysisWarning::NoSharedVocabulary);
        }
        for warning in &warnings {
            warn!("Degenerate input: {}", warning);
        }

        info!(
            "Analysis complete: similarity {:.2}%, {} of {} job keywords missing",
            similarity_details.score * 100.0,
            missing_terms.len(),
            target_terms.len()
        );

        AnalysisReport {
            candidate_terms,
            target_terms,
            missing_terms,
            similarity_score: similarity_details.score,
            similarity_details,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(words: &[&str]) -> TermSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_missing_keywords_scenario() {
        let report = analyze(
            "Experienced Python developer",
            "Python developer with SQL experience",
        );

        assert!(report.missing_terms.contains("SQL"));
        assert!(report.missing_terms.contains("experience"));
        assert!(!report.missing_terms.contains("Python"));
        assert!(report.similarity_score > 0.0 && report.similarity_score < 1.0);
        assert_eq!(report.matched_terms(), set(&["Python", "developer"]));
    }

    #[test]
    fn test_identical_documents() {
        let text = "Backend engineer with Rust and PostgreSQL experience.";
        let report = analyze(text, text);

        assert!(report.missing_terms.is_empty());
        assert_eq!(report.similarity_score, 1.0);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unrelated_documents() {
        let report = analyze("cat dog", "bird fish");

        assert_eq!(report.similarity_score, 0.0);
        assert_eq!(report.missing_terms, set(&["bird", "fish"]));
        assert_eq!(report.warnings, vec![AnalysisWarning::NoSharedVocabulary]);
    }

    #[test]
    fn test_empty_texts_are_warnings_not_errors() {
        let engine = AnalysisEngine::default();
        let report = engine
            .analyze_request(&AnalysisRequest::new("", ""))
            .unwrap();

        assert_eq!(report.similarity_score, 0.0);
        assert!(report.candidate_terms.is_empty());
        assert!(report.missing_terms.is_empty());
        assert!(report.warnings.contains(&AnalysisWarning::EmptyCandidateText));
        assert!(report.warnings.contains(&AnalysisWarning::EmptyTargetText));
    }

    #[test]
    fn test_missing_candidate_is_rejected() {
        let engine = AnalysisEngine::default();
        let request = AnalysisRequest {
            candidate_text: None,
            target_text: Some("Rust developer".to_string()),
        };

        let err = engine.analyze_request(&request).unwrap_err();
        assert!(matches!(err, ResumeAnalyzerError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_target_is_rejected() {
        let engine = AnalysisEngine::default();
        let request = AnalysisRequest {
            candidate_text: Some("Rust developer".to_string()),
            target_text: None,
        };

        let err = engine.analyze_request(&request).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_set_invariants_hold() {
        let report = analyze(
            "Led a team of engineers building Kafka pipelines in Scala.",
            "We need an engineer with Kafka, Spark and Scala. Management experience is a plus.",
        );

        assert!(report.missing_terms.is_subset(&report.target_terms));
        assert!(report.missing_terms.is_disjoint(&report.candidate_terms));
        assert!(report.missing_terms.contains("Spark"));
        assert!(!report.missing_terms.contains("Kafka"));
    }

    #[test]
    fn test_lowercase_config_changes_score_only() {
        let mut config = Config::default();
        config.scoring.lowercase = true;
        let engine = AnalysisEngine::from_config(&config);

        let report = engine.analyze("python developer", "Python Developer");

        assert_eq!(report.similarity_score, 1.0);
        // keyword matching stays case sensitive
        assert!(report.missing_terms.contains("Python"));
    }
}
