//! End-to-end recommendation engine.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::analysis::InterestNormalizer;
use crate::artifact::{ArtifactBundle, ArtifactStore, FsArtifactStore, MemoryArtifactStore};
use crate::classifier::ClassifierAdapter;
use crate::error::{CorsaError, Result};
use crate::features::FeatureExtractor;

use super::config::EngineConfig;
use super::result::PredictionResult;

/// Turns free-text interests into a course recommendation.
///
/// The engine owns an artifact store and the currently loaded bundle. The
/// bundle sits behind a read-write lock holding an `Arc`, so predictions
/// clone the handle and release the lock before doing any work. A reload
/// builds and validates the new bundle first and then swaps the `Arc` in a
/// single write, so concurrent readers see either the old bundle or the new
/// one, never a partial state.
#[derive(Debug)]
pub struct InferenceEngine {
    store: Arc<dyn ArtifactStore>,
    normalizer: InterestNormalizer,
    extractor: FeatureExtractor,
    bundle: RwLock<Option<Arc<ArtifactBundle>>>,
}

impl InferenceEngine {
    /// Create an engine reading artifacts from the configured directory.
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_store(Arc::new(FsArtifactStore::new(
            config.models_directory.clone(),
        )))
    }

    /// Create an engine over any artifact store.
    pub fn with_store(store: Arc<dyn ArtifactStore>) -> Self {
        InferenceEngine {
            store,
            normalizer: InterestNormalizer::new(),
            extractor: FeatureExtractor::new(),
            bundle: RwLock::new(None),
        }
    }

    /// Create an engine with the given bundle already loaded.
    pub fn with_bundle(bundle: ArtifactBundle) -> Self {
        let engine = Self::with_store(Arc::new(MemoryArtifactStore::new(bundle.clone())));
        *engine.bundle.write() = Some(Arc::new(bundle));
        engine
    }

    /// Whether a bundle is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.bundle.read().is_some()
    }

    /// Handle to the current bundle, if any.
    pub fn bundle(&self) -> Option<Arc<ArtifactBundle>> {
        self.bundle.read().clone()
    }

    /// Load artifacts if none are loaded yet.
    ///
    /// Loading is idempotent: once a bundle is in place, further calls leave
    /// it untouched. Use `reload_artifacts` to pick up replaced files.
    /// Returns whether a bundle is loaded afterwards.
    pub fn load_artifacts(&self) -> Result<bool> {
        if self.is_loaded() {
            return Ok(true);
        }
        self.reload_artifacts()
    }

    /// Load artifacts from the store, replacing the current bundle.
    ///
    /// The incoming bundle is fully constructed and validated before the
    /// swap. A store with no complete artifact set leaves the current bundle
    /// in place. Returns whether a bundle is loaded afterwards.
    pub fn reload_artifacts(&self) -> Result<bool> {
        match self.store.load()? {
            Some(bundle) => {
                info!(
                    "loaded {} artifacts with {} classes from {}",
                    bundle.classifier.kind_name(),
                    bundle.n_classes(),
                    self.store.location()
                );
                *self.bundle.write() = Some(Arc::new(bundle));
                Ok(true)
            }
            None => {
                info!("no artifacts found at {}", self.store.location());
                Ok(self.is_loaded())
            }
        }
    }

    /// Recommend a course for a free-text interest list.
    ///
    /// Runs the full pipeline: normalize, extract features, classify, and
    /// attach an explanation. Explanation failures degrade the explanation
    /// rather than the prediction; every other stage error propagates.
    pub fn predict(&self, interests: &str) -> Result<PredictionResult> {
        let bundle = self.bundle().ok_or_else(|| {
            CorsaError::model_not_loaded(format!(
                "no artifacts loaded from {}",
                self.store.location()
            ))
        })?;

        let normalized = self.normalizer.normalize(interests);
        let features = self.extractor.extract(&bundle.vectorizer, &normalized)?;
        let probabilities = ClassifierAdapter::new(&bundle.classifier).infer(&features)?;
        let winner = probabilities
            .argmax()
            .ok_or_else(|| CorsaError::classifier("empty probability distribution"))?;
        let probability = probabilities.get(winner).unwrap_or(0.0);
        let recommended_course = bundle.class_label(winner);

        let explanation = bundle.explainer().explain(
            &bundle.classifier,
            bundle.vectorizer.feature_names(),
            &features,
            winner,
        );

        debug!(
            "predicted {recommended_course} (p={probability:.4}) for {:?}",
            normalized.text
        );

        Ok(PredictionResult {
            recommended_course,
            probability,
            explanation,
        })
    }
}
