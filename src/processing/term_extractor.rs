//! Noun-based keyword extraction

use crate::processing::tagger::{shared_tagger, PosTagger, TaggedToken};
use log::debug;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Deduplicated surface-form terms from one document.
pub type TermSet = BTreeSet<String>;

/// Extracts common and proper nouns, kept exactly as written.
///
/// No lowercasing or lemmatization is applied, so "Management" and
/// "management" are different terms. Compound terms such as
/// "machine learning" come out as their separate nouns.
#[derive(Clone)]
pub struct TermExtractor {
    tagger: Arc<dyn PosTagger>,
}

impl Default for TermExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TermExtractor {
    /// Extractor backed by the process-wide tagger.
    pub fn new() -> Self {
        Self {
            tagger: shared_tagger(),
        }
    }

    pub fn with_tagger(tagger: Arc<dyn PosTagger>) -> Self {
        Self { tagger }
    }

    pub fn extract_terms(&self, text: &str) -> TermSet {
        let terms: TermSet = self
            .tagger
            .tag(text)
            .into_iter()
            .filter(|token| token.pos.is_noun())
            .map(|token| token.text)
            .collect();

        debug!("Extracted {} terms from {} characters", terms.len(), text.len());
        terms
    }

    /// Noun tokens in document order, duplicates removed, with their category.
    pub fn extract_tagged(&self, text: &str) -> Vec<TaggedToken> {
        let mut seen = BTreeSet::new();
        self.tagger
            .tag(text)
            .into_iter()
            .filter(|token| token.pos.is_noun() && seen.insert(token.text.clone()))
            .collect()
    }
}

/// Extract terms with the shared tagger.
pub fn extract_terms(text: &str) -> TermSet {
    TermExtractor::new().extract_terms(text)
}
