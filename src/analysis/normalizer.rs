//! Normalization of free-text interest lists.
//!
//! User input arrives as comma-separated phrases with arbitrary casing,
//! whitespace, and duplicates. Normalization is the only place that cleans
//! this up; everything downstream assumes its output.

use ahash::{AHashMap, AHashSet};

/// Normalized form of a raw interest list.
///
/// `tokens` holds the unique phrases in first-seen order; `text` is the
/// phrases joined with single spaces, which is what the document-style
/// vectorizers consume. Feeding `text` back through the normalizer yields
/// the same `text` again.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedInterests {
    /// Unique, lowercased, trimmed phrases in first-seen order.
    pub tokens: Vec<String>,
    /// The phrases joined with single spaces.
    pub text: String,
}

impl NormalizedInterests {
    /// Check whether normalization produced no usable tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Count the whitespace-separated words of the normalized text.
    ///
    /// Multi-word phrases contribute one count per word, so a word shared by
    /// two phrases counts twice. This is the record shape the mapping-style
    /// vectorizers consume.
    pub fn word_counts(&self) -> AHashMap<String, f64> {
        let mut counts = AHashMap::new();
        for word in self.text.split_whitespace() {
            *counts.entry(word.to_string()).or_insert(0.0) += 1.0;
        }
        counts
    }
}

/// Normalizer for comma-separated interest lists.
#[derive(Debug, Clone, Default)]
pub struct InterestNormalizer;

impl InterestNormalizer {
    /// Create a new interest normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a raw interest list.
    ///
    /// Splits on commas, trims and lowercases each segment, drops empty
    /// segments, and removes duplicates while preserving first-seen order.
    /// Empty input is not an error; it yields an empty set.
    pub fn normalize(&self, raw: &str) -> NormalizedInterests {
        let mut seen = AHashSet::new();
        let mut tokens = Vec::new();

        for segment in raw.split(',') {
            let token = segment.trim().to_lowercase();
            if token.is_empty() || seen.contains(&token) {
                continue;
            }
            seen.insert(token.clone());
            tokens.push(token);
        }

        let text = tokens.join(" ");
        NormalizedInterests { tokens, text }
    }
}
