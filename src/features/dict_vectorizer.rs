//! Mapping-style vectorizer for token count records.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CorsaError, Result};
use crate::features::build_vocabulary;
use crate::features::vector::FeatureVector;

/// Vocabulary lookup over token to count records.
///
/// The counterpart of [`CountVectorizer`](crate::features::CountVectorizer)
/// for models trained on explicit token counts instead of raw documents.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "DictVectorizerData", into = "DictVectorizerData")]
pub struct DictVectorizer {
    /// Vocabulary: the i-th name owns feature index i.
    feature_names: Vec<String>,
    /// Token -> index lookup derived from `feature_names`.
    vocabulary: AHashMap<String, usize>,
}

impl PartialEq for DictVectorizer {
    fn eq(&self, other: &Self) -> bool {
        self.feature_names == other.feature_names
    }
}

impl DictVectorizer {
    /// Create a vectorizer over a fixed vocabulary.
    pub fn new(feature_names: Vec<String>) -> Result<Self> {
        let vocabulary = build_vocabulary(&feature_names)?;
        Ok(Self {
            feature_names,
            vocabulary,
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

    /// Project one token to count record onto the vocabulary.
    pub fn transform(&self, record: &AHashMap<String, f64>) -> Result<FeatureVector> {
        if self.feature_names.is_empty() {
            return Err(CorsaError::vectorizer("vocabulary is empty"));
        }

        let mut values = vec![0.0; self.feature_names.len()];
        for (token, count) in record {
            if let Some(&idx) = self.vocabulary.get(token) {
                values[idx] = *count;
            }
        }

        Ok(FeatureVector::new(values))
    }
}

/// On-disk form of [`DictVectorizer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictVectorizerData {
    /// Vocabulary in index order.
    pub feature_names: Vec<String>,
}

impl TryFrom<DictVectorizerData> for DictVectorizer {
    type Error = CorsaError;

    fn try_from(data: DictVectorizerData) -> Result<Self> {
        Self::new(data.feature_names)
    }
}

impl From<DictVectorizer> for DictVectorizerData {
    fn from(vectorizer: DictVectorizer) -> Self {
        Self {
            feature_names: vectorizer.feature_names,
        }
    }
}
