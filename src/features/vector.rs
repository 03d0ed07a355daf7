//! Dense feature vectors.

use serde::{Deserialize, Serialize};

/// Dense feature vector aligned to a vectorizer vocabulary.
///
/// Index `i` holds the value for the vocabulary's `i`-th feature; tokens
/// absent from the input contribute zero. A zero vector is a valid outcome
/// (no input token hit the vocabulary), not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values, one per vocabulary entry.
    pub values: Vec<f64>,
}

impl FeatureVector {
    /// Create a feature vector from raw values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Create a zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension],
        }
    }

    /// Number of features.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Check whether every value is zero.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }

    /// Iterate over `(index, value)` pairs whose value is positive.
    pub fn present(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, value)| *value > 0.0)
    }
}
