//! Document-style count vectorizer.

use std::borrow::Cow;

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CorsaError, Result};
use crate::features::build_vocabulary;
use crate::features::vector::FeatureVector;

/// Default token pattern: runs of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Vocabulary-indexed token counter for raw documents.
///
/// The vocabulary is fixed at training time; `transform` tokenizes one
/// document with the configured pattern and counts occurrences of known
/// tokens. Unknown tokens contribute nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CountVectorizerData", into = "CountVectorizerData")]
pub struct CountVectorizer {
    /// Vocabulary: the i-th name owns feature index i.
    feature_names: Vec<String>,
    /// Token -> index lookup derived from `feature_names`.
    vocabulary: AHashMap<String, usize>,
    /// Tokenization pattern.
    token_pattern: Regex,
    /// Lowercase documents before tokenizing.
    lowercase: bool,
}

impl PartialEq for CountVectorizer {
    fn eq(&self, other: &Self) -> bool {
        self.feature_names == other.feature_names
            && self.token_pattern.as_str() == other.token_pattern.as_str()
            && self.lowercase == other.lowercase
    }
}

impl CountVectorizer {
    /// Create a vectorizer over a fixed vocabulary with the default token
    /// pattern and lowercasing enabled.
    pub fn new(feature_names: Vec<String>) -> Result<Self> {
        Self::with_options(feature_names, DEFAULT_TOKEN_PATTERN, true)
    }

    /// Create a vectorizer with a custom token pattern and case handling.
    pub fn with_options(
        feature_names: Vec<String>,
        token_pattern: &str,
        lowercase: bool,
    ) -> Result<Self> {
        let token_pattern = Regex::new(token_pattern).map_err(|e| {
            CorsaError::artifact(format!("invalid token pattern {token_pattern:?}: {e}"))
        })?;
        let vocabulary = build_vocabulary(&feature_names)?;

        Ok(Self {
            feature_names,
            vocabulary,
            token_pattern,
            lowercase,
        })
    }

    /// Names of the vocabulary features in index order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of features produced by `transform`.
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    /// Count vocabulary tokens in one document.
    ///
    /// An empty document yields a zero vector; an empty vocabulary is an
    /// error because no meaningful vector exists.
    pub fn transform(&self, document: &str) -> Result<FeatureVector> {
        if self.feature_names.is_empty() {
            return Err(CorsaError::vectorizer("vocabulary is empty"));
        }

        let document = if self.lowercase {
            Cow::Owned(document.to_lowercase())
        } else {
            Cow::Borrowed(document)
        };

        let mut values = vec![0.0; self.feature_names.len()];
        for token in self.token_pattern.find_iter(&document) {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                values[idx] += 1.0;
            }
        }

        Ok(FeatureVector::new(values))
    }
}

/// On-disk form of [`CountVectorizer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountVectorizerData {
    /// Vocabulary in index order.
    pub feature_names: Vec<String>,
    /// Token pattern; [`DEFAULT_TOKEN_PATTERN`] when absent.
    #[serde(default)]
    pub token_pattern: Option<String>,
    /// Lowercase documents before tokenizing.
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

impl TryFrom<CountVectorizerData> for CountVectorizer {
    type Error = CorsaError;

    fn try_from(data: CountVectorizerData) -> Result<Self> {
        let pattern = data
            .token_pattern
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_PATTERN);
        Self::with_options(data.feature_names, pattern, data.lowercase)
    }
}

impl From<CountVectorizer> for CountVectorizerData {
    fn from(vectorizer: CountVectorizer) -> Self {
        Self {
            feature_names: vectorizer.feature_names,
            token_pattern: Some(vectorizer.token_pattern.as_str().to_string()),
            lowercase: vectorizer.lowercase,
        }
    }
}
