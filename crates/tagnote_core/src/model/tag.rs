//! Tag record.

use super::ids::TagId;
use serde::{Deserialize, Serialize};

/// A reusable label that notes reference by id.
///
/// Labels carry no uniqueness constraint; two tags may share a label and
/// remain distinct for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub label: String,
}

impl Tag {
    /// Creates a tag with a freshly generated id.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_id(TagId::new(), label)
    }

    /// Creates a tag with a caller-provided id.
    pub fn with_id(id: TagId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Returns whether the label is empty or whitespace-only.
    pub fn has_blank_label(&self) -> bool {
        self.label.trim().is_empty()
    }
}
