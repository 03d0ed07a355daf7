//! Persisted model artifacts and the stores that load them.
//!
//! An artifact bundle pairs a trained classifier with the vectorizer it was
//! fitted against, plus metadata describing the class labels. Bundles are
//! validated on construction so that every loaded bundle is internally
//! consistent before the inference engine ever sees it.

pub mod bundle;
pub mod demo;
pub mod metadata;
pub mod store;

pub use bundle::*;
pub use demo::*;
pub use metadata::*;
pub use store::*;
