//! Resume analyzer library
//!
//! Compares a resume with a job description: nouns from both documents
//! give the missing keywords, and a bag-of-words cosine similarity over
//! all words gives the overall score.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeAnalyzerError};
pub use processing::analyzer::{analyze, AnalysisEngine, AnalysisReport, AnalysisRequest, AnalysisWarning};
pub use processing::tagger::{shared_tagger, LexiconTagger, PartOfSpeech, PosTagger, TaggedToken};
pub use processing::term_extractor::{extract_terms, TermExtractor, TermSet};
pub use processing::similarity::{SimilarityBreakdown, SimilarityScorer};
