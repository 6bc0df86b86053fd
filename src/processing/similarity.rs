//! Bag-of-words cosine similarity between two documents

use crate::config::ScoringConfig;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scores lexical overlap from raw token counts.
///
/// Every word-character run counts as a token, whatever its part of
/// speech, so this vocabulary is broader than the noun-only terms used
/// for keyword extraction.
pub struct SimilarityScorer {
    token_regex: Regex,
    lowercase: bool,
    min_token_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    /// Cosine similarity in [0, 1]
    pub score: f64,
    /// Distinct tokens across both documents
    pub vocabulary_size: usize,
    /// Distinct tokens found in both documents
    pub shared_tokens: usize,
    pub candidate_tokens: u64,
    pub target_tokens: u64,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self::from_config(&ScoringConfig::default())
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        let token_regex = Regex::new(r"\w+").expect("Invalid token regex");

        Self {
            token_regex,
            lowercase: config.lowercase,
            min_token_chars: config.min_token_chars.max(1),
        }
    }

    /// Cosine similarity of the two documents' count vectors.
    pub fn similarity(&self, candidate: &str, target: &str) -> f64 {
        self.breakdown(candidate, target).score
    }

    pub fn breakdown(&self, candidate: &str, target: &str) -> SimilarityBreakdown {
        let candidate_counts = self.count_tokens(candidate);
        let target_counts = self.count_tokens(target);

        // Integer accumulation keeps the score exactly symmetric.
        let (smaller, larger) = if candidate_counts.len() <= target_counts.len() {
            (&candidate_counts, &target_counts)
        } else {
            (&target_counts, &candidate_counts)
        };

        let mut dot: u128 = 0;
        let mut shared_tokens = 0;
        for (token, &count) in smaller {
            if let Some(&other) = larger.get(token) {
                dot += u128::from(count) * u128::from(other);
                shared_tokens += 1;
            }
        }

        let norm_candidate = squared_norm(&candidate_counts);
        let norm_target = squared_norm(&target_counts);

        let score = if dot == 0 || norm_candidate == 0 || norm_target == 0 {
            0.0
        } else {
            let denominator = ((norm_candidate as f64) * (norm_target as f64)).sqrt();
            (dot as f64 / denominator).clamp(0.0, 1.0)
        };

        let breakdown = SimilarityBreakdown {
            score,
            vocabulary_size: candidate_counts.len() + target_counts.len() - shared_tokens,
            shared_tokens,
            candidate_tokens: candidate_counts.values().sum(),
            target_tokens: target_counts.values().sum(),
        };

        debug!(
            "Similarity {:.4} over {} tokens ({} shared)",
            breakdown.score, breakdown.vocabulary_size, breakdown.shared_tokens
        );
        breakdown
    }

    fn count_tokens(&self, text: &str) -> HashMap<String, u64> {
        let mut counts = HashMap::new();

        for token in self.token_regex.find_iter(text).map(|m| m.as_str()) {
            if token.chars().count() < self.min_token_chars {
                continue;
            }
            let key = if self.lowercase {
                token.to_lowercase()
            } else {
                token.to_string()
            };
            *counts.entry(key).or_insert(0) += 1;
        }

        counts
    }
}

fn squared_norm(counts: &HashMap<String, u64>) -> u128 {
    counts
        .values()
        .map(|&c| u128::from(c) * u128::from(c))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_texts_score_one() {
        let scorer = SimilarityScorer::new();
        let text = "Rust engineer, Rust mentor and systems programmer";
        assert_eq!(scorer.similarity(text, text), 1.0);
    }

    #[test]
    fn test_disjoint_vocabulary_scores_zero() {
        let scorer = SimilarityScorer::new();
        let breakdown = scorer.breakdown("cat dog", "bird fish");

        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.shared_tokens, 0);
        assert_eq!(breakdown.vocabulary_size, 4);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.similarity("", ""), 0.0);
        assert_eq!(scorer.similarity("", "anything"), 0.0);
        assert_eq!(scorer.similarity("anything", ""), 0.0);
        assert_eq!(scorer.similarity("!!! ...", "?"), 0.0);
    }

    #[test]
    fn test_known_cosine_value() {
        let scorer = SimilarityScorer::new();
        // [1, 1, 0] . [1, 0, 1] / (sqrt 2 * sqrt 2)
        let score = scorer.similarity("alpha beta", "alpha gamma");
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_counts_weight_the_vectors() {
        let scorer = SimilarityScorer::new();
        // [2, 1] . [1, 0] / (sqrt 5 * 1)
        let score = scorer.similarity("rust rust go", "rust");
        assert!((score - 2.0 / 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.similarity("Python", "python"), 0.0);

        let folding = SimilarityScorer::from_config(&ScoringConfig {
            lowercase: true,
            min_token_chars: 1,
        });
        assert_eq!(folding.similarity("Python", "python"), 1.0);
    }

    #[test]
    fn test_all_tokens_count_not_only_nouns() {
        let scorer = SimilarityScorer::new();
        assert!(scorer.similarity("with quickly the", "the quickly with") > 0.99);
    }

    #[test]
    fn test_min_token_chars_filter() {
        let scorer = SimilarityScorer::from_config(&ScoringConfig {
            lowercase: false,
            min_token_chars: 2,
        });
        let breakdown = scorer.breakdown("a go", "a rust");
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.candidate_tokens, 1);
    }

    #[test]
    fn test_order_does_not_matter() {
        let scorer = SimilarityScorer::new();
        let a = "Python developer with SQL experience";
        let b = "Experienced Python developer";
        assert_eq!(scorer.similarity(a, b), scorer.similarity(b, a));
    }
}
