//! Nearest centroid classifier.

use serde::{Deserialize, Serialize};

use crate::classifier::softmax;
use crate::error::{CorsaError, Result};
use crate::features::FeatureVector;

/// Nearest centroid classifier.
///
/// One centroid per class; class scores are cosine similarities against the
/// input, converted to a distribution with softmax. The model carries no
/// per-feature weights, so it offers probabilities without any
/// introspection capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestCentroid {
    /// Per-class centroid vectors.
    pub centroids: Vec<Vec<f64>>,
}

impl NearestCentroid {
    /// Create a model from per-class centroids.
    pub fn new(centroids: Vec<Vec<f64>>) -> Self {
        Self { centroids }
    }

    /// Number of classes the model scores.
    pub fn n_classes(&self) -> usize {
        self.centroids.len()
    }

    /// Number of features the model expects.
    pub fn n_features(&self) -> usize {
        self.centroids.first().map(|c| c.len()).unwrap_or(0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.centroids.is_empty() {
            return Err(CorsaError::artifact(
                "nearest_centroid model has no centroids",
            ));
        }
        let width = self.centroids[0].len();
        if self.centroids.iter().any(|c| c.len() != width) {
            return Err(CorsaError::artifact(
                "nearest_centroid model has ragged centroids",
            ));
        }
        Ok(())
    }

    /// Softmax over per-class cosine similarities.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if features.dimension() != self.n_features() {
            return Err(CorsaError::classifier(format!(
                "nearest_centroid model expects {} features, got {}",
                self.n_features(),
                features.dimension()
            )));
        }

        let scores: Vec<f64> = self
            .centroids
            .iter()
            .map(|centroid| cosine_similarity(&features.values, centroid))
            .collect();
        Ok(softmax(&scores))
    }
}

/// Calculate cosine similarity between two vectors.
fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let magnitude_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot_product / (magnitude_a * magnitude_b)
    }
}
