//! The engine that ties normalization, feature extraction, classification
//! and explanation into one prediction pipeline.

pub mod config;
pub mod engine;
pub mod result;

pub use config::*;
pub use engine::*;
pub use result::*;
