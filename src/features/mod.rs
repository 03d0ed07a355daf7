//! Feature extraction for normalized interest lists.
//!
//! Persisted vectorizer models fix the vocabulary and input convention at
//! training time; extraction strategies adapt one normalized interest list
//! to whichever convention the loaded model expects.

pub mod count_vectorizer;
pub mod dict_vectorizer;
pub mod extractor;
pub mod vector;
pub mod vectorizer;

// Re-export commonly used types
pub use count_vectorizer::*;
pub use dict_vectorizer::*;
pub use extractor::*;
pub use vector::*;
pub use vectorizer::*;

use ahash::AHashMap;

use crate::error::{CorsaError, Result};

/// Build the token to index map for a vocabulary, rejecting duplicates.
pub(crate) fn build_vocabulary(feature_names: &[String]) -> Result<AHashMap<String, usize>> {
    let mut vocabulary = AHashMap::with_capacity(feature_names.len());
    for (idx, name) in feature_names.iter().enumerate() {
        if vocabulary.insert(name.clone(), idx).is_some() {
            return Err(CorsaError::artifact(format!(
                "duplicate feature name {name:?} in vocabulary"
            )));
        }
    }
    Ok(vocabulary)
}
