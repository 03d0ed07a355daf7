//! Text analysis module for Corsa.
//!
//! This module turns raw comma-separated interest text into the normalized
//! form the rest of the pipeline consumes.

pub mod normalizer;

// Re-export commonly used types
pub use normalizer::*;
