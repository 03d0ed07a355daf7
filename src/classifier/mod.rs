//! Pre-trained classifier models and the inference adapter.
//!
//! The serialized model is a tagged enum so one artifact file can carry any
//! supported architecture. Only architectures with a probability interface
//! can serve predictions; introspection capabilities (feature importances,
//! coefficients) are optional and drive explanation selection.

pub mod adapter;
pub mod centroid;
pub mod forest;
pub mod linear;
pub mod model;

// Re-export commonly used types
pub use adapter::*;
pub use centroid::*;
pub use forest::*;
pub use linear::*;
pub use model::*;

/// Numerically stable softmax.
pub(crate) fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
