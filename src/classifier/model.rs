//! The persisted classifier contract.

use serde::{Deserialize, Serialize};

use crate::classifier::centroid::NearestCentroid;
use crate::classifier::forest::RandomForest;
use crate::classifier::linear::{LinearSvc, LogisticRegression};
use crate::error::{CorsaError, Result};
use crate::features::FeatureVector;

/// A pre-trained classifier in its serialized form.
///
/// The tag lets one artifact file carry any supported architecture.
/// Capability accessors report what each variant can expose for
/// explanation; architectures without a probability interface fail in
/// [`predict_proba`](ClassifierModel::predict_proba) rather than at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ClassifierModel {
    /// Multinomial logistic regression.
    LogisticRegression(LogisticRegression),
    /// Random forest with leaf class distributions.
    RandomForest(RandomForest),
    /// Nearest centroid over cosine similarity.
    NearestCentroid(NearestCentroid),
    /// Linear SVM without probability calibration.
    LinearSvc(LinearSvc),
}

impl ClassifierModel {
    /// Name of the model kind, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ClassifierModel::LogisticRegression(_) => "logistic_regression",
            ClassifierModel::RandomForest(_) => "random_forest",
            ClassifierModel::NearestCentroid(_) => "nearest_centroid",
            ClassifierModel::LinearSvc(_) => "linear_svc",
        }
    }

    /// Number of classes the model scores.
    pub fn n_classes(&self) -> usize {
        match self {
            ClassifierModel::LogisticRegression(m) => m.n_classes(),
            ClassifierModel::RandomForest(m) => m.n_classes,
            ClassifierModel::NearestCentroid(m) => m.n_classes(),
            ClassifierModel::LinearSvc(m) => m.n_classes(),
        }
    }

    /// Number of features the model expects.
    pub fn n_features(&self) -> usize {
        match self {
            ClassifierModel::LogisticRegression(m) => m.n_features(),
            ClassifierModel::RandomForest(m) => m.n_features(),
            ClassifierModel::NearestCentroid(m) => m.n_features(),
            ClassifierModel::LinearSvc(m) => m.n_features(),
        }
    }

    /// Check structural integrity of a deserialized model.
    pub fn validate(&self) -> Result<()> {
        match self {
            ClassifierModel::LogisticRegression(m) => m.validate(),
            ClassifierModel::RandomForest(m) => m.validate(),
            ClassifierModel::NearestCentroid(m) => m.validate(),
            ClassifierModel::LinearSvc(m) => m.validate(),
        }
    }

    /// Class probability distribution for one feature vector.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<ClassProbabilities> {
        let values = match self {
            ClassifierModel::LogisticRegression(m) => m.predict_proba(features)?,
            ClassifierModel::RandomForest(m) => m.predict_proba(features)?,
            ClassifierModel::NearestCentroid(m) => m.predict_proba(features)?,
            ClassifierModel::LinearSvc(_) => {
                return Err(CorsaError::classifier(
                    "linear_svc models expose no probability interface",
                ));
            }
        };
        Ok(ClassProbabilities::new(values))
    }

    /// Global feature importances, when the architecture has them.
    pub fn feature_importances(&self) -> Option<&[f64]> {
        match self {
            ClassifierModel::RandomForest(m) => Some(&m.feature_importances),
            _ => None,
        }
    }

    /// Per-class coefficient rows, when the architecture has them.
    pub fn coefficients(&self) -> Option<&[Vec<f64>]> {
        match self {
            ClassifierModel::LogisticRegression(m) => Some(&m.coefficients),
            ClassifierModel::LinearSvc(m) => Some(&m.coefficients),
            _ => None,
        }
    }
}

/// Probability distribution over the course classes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    /// One probability per class, aligned to the metadata class order.
    pub values: Vec<f64>,
}

impl ClassProbabilities {
    /// Wrap raw per-class probabilities.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the distribution is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Probability of one class.
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied()
    }

    /// Index of the most probable class.
    ///
    /// Ties keep the first maximum, so equal probabilities resolve to the
    /// lowest class index.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &value) in self.values.iter().enumerate() {
            let better = match best {
                Some((_, best_value)) => value > best_value,
                None => true,
            };
            if better {
                best = Some((idx, value));
            }
        }
        best.map(|(idx, _)| idx)
    }

    /// Check the distribution is well formed: non-empty, finite,
    /// non-negative, and summing to one within `tolerance`.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        if self.values.is_empty() {
            return Err(CorsaError::classifier("empty probability distribution"));
        }
        if self.values.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(CorsaError::classifier(
                "probability distribution contains invalid values",
            ));
        }
        let sum: f64 = self.values.iter().sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(CorsaError::classifier(format!(
                "probability distribution sums to {sum}, expected 1"
            )));
        }
        Ok(())
    }
}
