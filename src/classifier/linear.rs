//! Linear classifier models.

use serde::{Deserialize, Serialize};

use crate::classifier::softmax;
use crate::error::{CorsaError, Result};
use crate::features::FeatureVector;

/// Multinomial logistic regression.
///
/// One coefficient row and one intercept per class; probabilities come from
/// a softmax over the per-class scores. Exposes its coefficients for
/// explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// Per-class coefficient rows, each of vocabulary length.
    pub coefficients: Vec<Vec<f64>>,
    /// Per-class intercepts.
    pub intercepts: Vec<f64>,
}

impl LogisticRegression {
    /// Create a model from per-class coefficient rows and intercepts.
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Self {
        Self {
            coefficients,
            intercepts,
        }
    }

    /// Number of classes the model scores.
    pub fn n_classes(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of features the model expects.
    pub fn n_features(&self) -> usize {
        self.coefficients.first().map(|row| row.len()).unwrap_or(0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_linear_shape("logistic_regression", &self.coefficients, &self.intercepts)
    }

    /// Class probability distribution for one feature vector.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let scores = decision_function(
            "logistic_regression",
            &self.coefficients,
            &self.intercepts,
            features,
        )?;
        Ok(softmax(&scores))
    }
}

/// Linear SVM without probability calibration.
///
/// Scores margins the same way as [`LogisticRegression`] and exposes its
/// coefficients, but carries no probability interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearSvc {
    /// Per-class coefficient rows, each of vocabulary length.
    pub coefficients: Vec<Vec<f64>>,
    /// Per-class intercepts.
    pub intercepts: Vec<f64>,
}

impl LinearSvc {
    /// Create a model from per-class coefficient rows and intercepts.
    pub fn new(coefficients: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Self {
        Self {
            coefficients,
            intercepts,
        }
    }

    /// Number of classes the model scores.
    pub fn n_classes(&self) -> usize {
        self.coefficients.len()
    }

    /// Number of features the model expects.
    pub fn n_features(&self) -> usize {
        self.coefficients.first().map(|row| row.len()).unwrap_or(0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        validate_linear_shape("linear_svc", &self.coefficients, &self.intercepts)
    }

    /// Margin scores for one feature vector.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        decision_function("linear_svc", &self.coefficients, &self.intercepts, features)
    }
}

fn validate_linear_shape(
    kind: &str,
    coefficients: &[Vec<f64>],
    intercepts: &[f64],
) -> Result<()> {
    if coefficients.is_empty() {
        return Err(CorsaError::artifact(format!(
            "{kind} model has no coefficient rows"
        )));
    }
    if coefficients.len() != intercepts.len() {
        return Err(CorsaError::artifact(format!(
            "{kind} model has {} coefficient rows but {} intercepts",
            coefficients.len(),
            intercepts.len()
        )));
    }
    let width = coefficients[0].len();
    if coefficients.iter().any(|row| row.len() != width) {
        return Err(CorsaError::artifact(format!(
            "{kind} model has ragged coefficient rows"
        )));
    }
    Ok(())
}

fn decision_function(
    kind: &str,
    coefficients: &[Vec<f64>],
    intercepts: &[f64],
    features: &FeatureVector,
) -> Result<Vec<f64>> {
    let expected = coefficients.first().map(|row| row.len()).unwrap_or(0);
    if features.dimension() != expected {
        return Err(CorsaError::classifier(format!(
            "{kind} model expects {expected} features, got {}",
            features.dimension()
        )));
    }

    Ok(coefficients
        .iter()
        .zip(intercepts)
        .map(|(row, intercept)| {
            let score: f64 = row
                .iter()
                .zip(&features.values)
                .map(|(weight, value)| weight * value)
                .sum();
            score + intercept
        })
        .collect())
}
