//! Metadata describing a trained artifact bundle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive metadata stored alongside a classifier and vectorizer.
///
/// The `classes` list maps class indices to course labels. It is optional in
/// the serialized form: a bundle without it still predicts, falling back to
/// stringified class indices as labels.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ArtifactMetadata {
    /// Course labels in class-index order.
    #[serde(default)]
    pub classes: Vec<String>,

    /// Free-form note about how the artifacts were produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the model was trained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
}

impl ArtifactMetadata {
    /// Create metadata carrying only class labels.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArtifactMetadata {
            classes: classes.into_iter().map(Into::into).collect(),
            note: None,
            trained_at: None,
        }
    }

    /// Label for a class index, or `None` when the index is not covered.
    pub fn class_label(&self, class_idx: usize) -> Option<&str> {
        self.classes.get(class_idx).map(String::as_str)
    }
}
