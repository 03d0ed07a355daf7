//! Adapter between feature vectors and classifier probabilities.

use crate::classifier::model::{ClassProbabilities, ClassifierModel};
use crate::error::Result;
use crate::features::FeatureVector;

/// Tolerance for the probability mass of a returned distribution.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Uniform inference surface over the classifier model zoo.
///
/// Scores one feature vector and validates the returned distribution, so
/// downstream stages can rely on well-formed probabilities regardless of
/// which architecture is loaded.
#[derive(Debug)]
pub struct ClassifierAdapter<'a> {
    model: &'a ClassifierModel,
}

impl<'a> ClassifierAdapter<'a> {
    /// Wrap a classifier model.
    pub fn new(model: &'a ClassifierModel) -> Self {
        Self { model }
    }

    /// The wrapped model.
    pub fn model(&self) -> &ClassifierModel {
        self.model
    }

    /// Produce the validated class probability distribution.
    pub fn infer(&self, features: &FeatureVector) -> Result<ClassProbabilities> {
        let probabilities = self.model.predict_proba(features)?;
        probabilities.validate(PROBABILITY_SUM_TOLERANCE)?;
        Ok(probabilities)
    }
}
