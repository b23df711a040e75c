//! In-memory tag registry.

use crate::model::ids::TagId;
use crate::model::tag::Tag;
use std::collections::HashSet;

/// Insertion-ordered collection of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Tag>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from persisted tags.
    ///
    /// Later entries repeating an earlier id are dropped.
    pub fn from_tags(tags: Vec<Tag>) -> Self {
        let mut seen = HashSet::with_capacity(tags.len());
        let tags = tags.into_iter().filter(|tag| seen.insert(tag.id)).collect();
        Self { tags }
    }

    /// Appends a tag with a fresh id. The label is stored as given.
    pub fn add_tag(&mut self, label: impl Into<String>) -> Tag {
        let tag = Tag::new(label);
        self.tags.push(tag.clone());
        tag
    }

    /// Replaces the label of `id`. Returns `false` when `id` is unknown.
    pub fn update_tag(&mut self, id: TagId, label: impl Into<String>) -> bool {
        match self.tags.iter_mut().find(|tag| tag.id == id) {
            Some(tag) => {
                tag.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Removes `id`. Returns `false` when `id` is unknown.
    pub fn delete_tag(&mut self, id: TagId) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.id != id);
        self.tags.len() != before
    }

    /// Read-only view in insertion order.
    pub fn list_tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.id == id)
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
