//! # Corsa
//!
//! A course recommendation inference engine for Rust.
//!
//! ## Features
//!
//! - Comma-separated interest normalization
//! - Count and dict vectorizers with strategy fallback
//! - Linear, forest and centroid classifiers behind one adapter
//! - Coefficient and importance based explanations
//! - Atomic artifact reload under concurrent predictions
//! - CLI and HTTP API over the same engine

pub mod analysis;
pub mod artifact;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod explain;
pub mod features;
pub mod inference;
pub mod server;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
