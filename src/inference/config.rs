//! Engine configuration.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable naming the artifact directory.
pub const MODEL_DIR_ENV: &str = "MODEL_DIR";

/// Artifact directory used when nothing is configured.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Configuration for building an inference engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Directory holding `model.json`, `vectorizer.json` and `meta.json`.
    pub models_directory: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            models_directory: PathBuf::from(DEFAULT_MODEL_DIR),
        }
    }
}

impl EngineConfig {
    /// Create a config pointing at the given artifact directory.
    pub fn new<P: Into<PathBuf>>(models_directory: P) -> Self {
        EngineConfig {
            models_directory: models_directory.into(),
        }
    }

    /// Read the artifact directory from `MODEL_DIR`, falling back to the
    /// default when the variable is unset or empty.
    pub fn from_env() -> Self {
        match env::var(MODEL_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => EngineConfig::new(dir),
            _ => EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_directory() {
        let config = EngineConfig::default();

        // Expected
        assert_eq!(config.models_directory, PathBuf::from("models"));
    }

    #[test]
    fn test_config_custom_directory() {
        let config = EngineConfig::new("/var/lib/corsa/models");

        // Expected
        assert_eq!(
            config.models_directory,
            PathBuf::from("/var/lib/corsa/models")
        );
    }
}
