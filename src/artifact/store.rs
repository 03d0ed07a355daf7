//! Pluggable stores that load artifact bundles.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::classifier::ClassifierModel;
use crate::error::{CorsaError, Result};
use crate::features::VectorizerModel;

use super::bundle::ArtifactBundle;
use super::metadata::ArtifactMetadata;

/// File name of the serialized classifier.
pub const MODEL_FILE: &str = "model.json";

/// File name of the serialized vectorizer.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// File name of the optional bundle metadata.
pub const METADATA_FILE: &str = "meta.json";

/// A trait for backends that produce artifact bundles.
///
/// `load` returns `Ok(None)` when the store holds no complete artifact set,
/// which the engine treats differently from a corrupt one: an absent bundle
/// is reported as not loaded, a corrupt bundle is a hard error.
pub trait ArtifactStore: Send + Sync + std::fmt::Debug {
    /// Load a bundle, or `None` when the store holds no complete set.
    fn load(&self) -> Result<Option<ArtifactBundle>>;

    /// Human-readable description of where artifacts come from.
    fn location(&self) -> String;
}

/// Loads artifact bundles from JSON files in a directory.
///
/// The directory holds `model.json`, `vectorizer.json` and an optional
/// `meta.json`. A missing model or vectorizer file means no bundle; a file
/// that exists but fails to parse is an error.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    directory: PathBuf,
}

impl FsArtifactStore {
    /// Create a store over the given artifact directory.
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        FsArtifactStore {
            directory: directory.into(),
        }
    }

    /// The directory this store reads from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Write a bundle's parts as pretty-printed JSON files.
    ///
    /// Creates the directory if needed. Used to lay down fixture and demo
    /// artifacts; the inference path itself never writes.
    pub fn save(&self, bundle: &ArtifactBundle) -> Result<()> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            CorsaError::artifact(format!(
                "failed to create {}: {e}",
                self.directory.display()
            ))
        })?;
        self.write_json(MODEL_FILE, &bundle.classifier)?;
        self.write_json(VECTORIZER_FILE, &bundle.vectorizer)?;
        self.write_json(METADATA_FILE, &bundle.metadata)?;
        Ok(())
    }

    fn write_json<T: serde::Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let path = self.directory.join(name);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json)
            .map_err(|e| CorsaError::artifact(format!("failed to write {}: {e}", path.display())))
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        let path = self.directory.join(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Ok(None);
                }
                return Err(CorsaError::artifact(format!(
                    "failed to read {}: {e}",
                    path.display()
                )));
            }
        };
        let value = serde_json::from_str(&content).map_err(|e| {
            CorsaError::artifact(format!("failed to parse {}: {e}", path.display()))
        })?;
        Ok(Some(value))
    }
}

impl ArtifactStore for FsArtifactStore {
    fn load(&self) -> Result<Option<ArtifactBundle>> {
        let classifier: ClassifierModel = match self.read_json(MODEL_FILE)? {
            Some(classifier) => classifier,
            None => return Ok(None),
        };
        let vectorizer: VectorizerModel = match self.read_json(VECTORIZER_FILE)? {
            Some(vectorizer) => vectorizer,
            None => return Ok(None),
        };
        let metadata: ArtifactMetadata = self.read_json(METADATA_FILE)?.unwrap_or_default();
        ArtifactBundle::new(classifier, vectorizer, metadata).map(Some)
    }

    fn location(&self) -> String {
        self.directory.display().to_string()
    }
}

/// Serves a bundle held in memory.
///
/// Each `load` hands out a fresh clone, so callers can treat it exactly like
/// a filesystem store. Used by tests and the demo command.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    bundle: Option<ArtifactBundle>,
}

impl MemoryArtifactStore {
    /// Create a store that serves the given bundle.
    pub fn new(bundle: ArtifactBundle) -> Self {
        MemoryArtifactStore {
            bundle: Some(bundle),
        }
    }

    /// Create a store with no bundle.
    pub fn empty() -> Self {
        MemoryArtifactStore { bundle: None }
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn load(&self) -> Result<Option<ArtifactBundle>> {
        Ok(self.bundle.clone())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
