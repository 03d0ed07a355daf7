//! Capability-driven explanation of predictions.
//!
//! Whatever introspection a loaded classifier offers (global feature
//! importances, per-class coefficients, or nothing) is resolved once per
//! bundle and dispatched on per request. Explanation failures never fail a
//! prediction; they degrade the explanation instead.

pub mod explainer;
pub mod explanation;

// Re-export commonly used types
pub use explainer::*;
pub use explanation::*;
