//! The persisted vectorizer contract.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CorsaError, Result};
use crate::features::count_vectorizer::CountVectorizer;
use crate::features::dict_vectorizer::DictVectorizer;
use crate::features::vector::FeatureVector;

/// A persisted feature extraction model.
///
/// The two variants expose incompatible input conventions: `Count` consumes
/// one raw document, `Dict` consumes a token to count record. Calling the
/// wrong transform is a vectorizer error, which is what drives strategy
/// fallback during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "vectorizer_type", rename_all = "snake_case")]
pub enum VectorizerModel {
    /// Document-style count vectorizer.
    Count(CountVectorizer),
    /// Mapping-style vectorizer.
    Dict(DictVectorizer),
}

impl VectorizerModel {
    /// Name of the vectorizer kind, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            VectorizerModel::Count(_) => "count",
            VectorizerModel::Dict(_) => "dict",
        }
    }

    /// Names of the vocabulary features in index order.
    pub fn feature_names(&self) -> &[String] {
        match self {
            VectorizerModel::Count(v) => v.feature_names(),
            VectorizerModel::Dict(v) => v.feature_names(),
        }
    }

    /// Number of features produced by the transforms.
    pub fn n_features(&self) -> usize {
        self.feature_names().len()
    }

    /// Transform one raw document.
    pub fn transform_document(&self, document: &str) -> Result<FeatureVector> {
        match self {
            VectorizerModel::Count(v) => v.transform(document),
            VectorizerModel::Dict(_) => Err(CorsaError::vectorizer(
                "dict vectorizer expects token counts, not raw documents",
            )),
        }
    }

    /// Transform one token to count record.
    pub fn transform_record(&self, record: &AHashMap<String, f64>) -> Result<FeatureVector> {
        match self {
            VectorizerModel::Count(_) => Err(CorsaError::vectorizer(
                "count vectorizer expects raw documents, not token counts",
            )),
            VectorizerModel::Dict(v) => v.transform(record),
        }
    }
}
