//! Explanation payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of tokens reported in one explanation.
pub const MAX_CONTRIBUTING_TOKENS: usize = 5;

/// How an explanation was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationMethod {
    /// Global feature importances of the model.
    FeatureImportances,
    /// Per-class coefficient contributions.
    CoefContributions,
    /// The model supports no introspection.
    None,
    /// Explanation computation failed; the prediction is still valid.
    Error,
}

impl ExplanationMethod {
    /// Name of the method, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplanationMethod::FeatureImportances => "feature_importances",
            ExplanationMethod::CoefContributions => "coef_contributions",
            ExplanationMethod::None => "none",
            ExplanationMethod::Error => "error",
        }
    }
}

/// Token-level account of one prediction.
///
/// Holds at most [`MAX_CONTRIBUTING_TOKENS`] entries, each keyed by a token
/// that was present in the request's feature vector. The map is ordered so
/// serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    /// How the token weights were derived.
    pub method: ExplanationMethod,
    /// Token -> weight, at most [`MAX_CONTRIBUTING_TOKENS`] entries.
    pub top_contributing_tokens: BTreeMap<String, f64>,
}

impl Explanation {
    /// Create an explanation with the given method and token weights.
    pub fn new(method: ExplanationMethod, top_contributing_tokens: BTreeMap<String, f64>) -> Self {
        Self {
            method,
            top_contributing_tokens,
        }
    }

    /// Explanation for models without introspection.
    pub fn none() -> Self {
        Self::new(ExplanationMethod::None, BTreeMap::new())
    }

    /// Degraded explanation after an internal failure.
    pub fn degraded() -> Self {
        Self::new(ExplanationMethod::Error, BTreeMap::new())
    }
}
