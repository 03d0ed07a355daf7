//! Error types for the Corsa library.
//!
//! All failures are represented by the [`CorsaError`] enum. The taxonomy is
//! deliberately small: callers of the inference pipeline learn the kind of
//! failure (artifacts missing, feature extraction exhausted, classifier
//! refused) without losing the underlying causes.
//!
//! # Examples
//!
//! ```
//! use corsa::error::{CorsaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(CorsaError::classifier("no probability interface"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::fmt;
use std::io;

use thiserror::Error;

/// The main error type for Corsa operations.
///
/// This enum represents all possible errors that can occur in the Corsa
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum CorsaError {
    /// No artifact bundle is loaded.
    #[error("Model not loaded: {0}")]
    ModelNotLoaded(String),

    /// Every feature extraction strategy failed.
    #[error(transparent)]
    FeatureExtraction(#[from] FeatureExtractionError),

    /// Probability inference errors.
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// A vectorizer rejected its input.
    #[error("Vectorizer error: {0}")]
    Vectorizer(String),

    /// Artifact files are unreadable or structurally invalid.
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with CorsaError.
pub type Result<T> = std::result::Result<T, CorsaError>;

impl CorsaError {
    /// Create a new model-not-loaded error.
    pub fn model_not_loaded<S: Into<String>>(msg: S) -> Self {
        CorsaError::ModelNotLoaded(msg.into())
    }

    /// Create a new classifier error.
    pub fn classifier<S: Into<String>>(msg: S) -> Self {
        CorsaError::Classifier(msg.into())
    }

    /// Create a new vectorizer error.
    pub fn vectorizer<S: Into<String>>(msg: S) -> Self {
        CorsaError::Vectorizer(msg.into())
    }

    /// Create a new artifact error.
    pub fn artifact<S: Into<String>>(msg: S) -> Self {
        CorsaError::Artifact(msg.into())
    }
}

/// Failure of a single extraction strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyFailure {
    /// Name of the strategy that failed.
    pub strategy: &'static str,
    /// Why it failed.
    pub reason: String,
}

impl StrategyFailure {
    /// Create a new strategy failure record.
    pub fn new<S: Into<String>>(strategy: &'static str, reason: S) -> Self {
        Self {
            strategy,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for StrategyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} strategy: {}", self.strategy, self.reason)
    }
}

/// Every extraction strategy failed.
///
/// All causes are retained in attempt order so callers can see why each
/// strategy was rejected, not just the last one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Feature extraction failed: {}", join_failures(.failures))]
pub struct FeatureExtractionError {
    /// One entry per attempted strategy, in attempt order.
    pub failures: Vec<StrategyFailure>,
}

impl FeatureExtractionError {
    /// Create an error from the collected per-strategy failures.
    pub fn new(failures: Vec<StrategyFailure>) -> Self {
        Self { failures }
    }
}

fn join_failures(failures: &[StrategyFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
