//! Keyword extraction, similarity scoring and the analysis engine

pub mod tagger;
pub mod term_extractor;
pub mod similarity;
pub mod analyzer;
