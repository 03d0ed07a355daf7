//! A validated pairing of classifier, vectorizer and metadata.

use crate::classifier::ClassifierModel;
use crate::error::{CorsaError, Result};
use crate::explain::ExplainerKind;
use crate::features::VectorizerModel;

use super::metadata::ArtifactMetadata;

/// A trained classifier together with the vectorizer it was fitted against.
///
/// Construction checks the classifier's structural integrity and that its
/// feature dimension matches the vectorizer's output, so a bundle handed to
/// the engine never produces shape errors mid-prediction. The explanation
/// capability is resolved once here and reused for every prediction.
#[derive(Debug, Clone)]
pub struct ArtifactBundle {
    /// The trained classification model.
    pub classifier: ClassifierModel,

    /// The vectorizer that turns normalized interests into features.
    pub vectorizer: VectorizerModel,

    /// Class labels and provenance.
    pub metadata: ArtifactMetadata,

    explainer: ExplainerKind,
}

impl ArtifactBundle {
    /// Build a bundle, validating that its parts fit together.
    pub fn new(
        classifier: ClassifierModel,
        vectorizer: VectorizerModel,
        metadata: ArtifactMetadata,
    ) -> Result<Self> {
        classifier.validate()?;
        if classifier.n_features() != vectorizer.n_features() {
            return Err(CorsaError::artifact(format!(
                "{} classifier expects {} features but {} vectorizer produces {}",
                classifier.kind_name(),
                classifier.n_features(),
                vectorizer.kind_name(),
                vectorizer.n_features()
            )));
        }
        let explainer = ExplainerKind::resolve(&classifier);
        Ok(ArtifactBundle {
            classifier,
            vectorizer,
            metadata,
            explainer,
        })
    }

    /// Explanation capability resolved at construction time.
    pub fn explainer(&self) -> ExplainerKind {
        self.explainer
    }

    /// Course label for a class index.
    ///
    /// Falls back to the stringified index when the metadata does not cover
    /// that class.
    pub fn class_label(&self, class_idx: usize) -> String {
        match self.metadata.class_label(class_idx) {
            Some(label) => label.to_string(),
            None => class_idx.to_string(),
        }
    }

    /// Number of classes the classifier distinguishes.
    pub fn n_classes(&self) -> usize {
        self.classifier.n_classes()
    }
}
