//! Note records, drafts and the resolved display projection.

use super::ids::{NoteId, TagId};
use super::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Canonical note record in its persisted ("raw") form.
///
/// Tags are held as ids. Serialized as `{id, title, markdown, tagIds}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Markdown source. Never interpreted by core.
    pub markdown: String,
    /// Ordered set of referenced tags, in insertion order.
    pub tag_ids: Vec<TagId>,
}

impl Note {
    /// Builds a note from a draft with a caller-provided id.
    pub fn from_draft(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            markdown: draft.markdown,
            tag_ids: dedup_tag_ids(draft.tag_ids),
        }
    }

    /// Replaces every mutable field with the draft values.
    pub fn apply(&mut self, draft: NoteDraft) {
        self.title = draft.title;
        self.markdown = draft.markdown;
        self.tag_ids = dedup_tag_ids(draft.tag_ids);
    }

    pub fn has_tag(&self, tag_id: TagId) -> bool {
        self.tag_ids.contains(&tag_id)
    }
}

/// Caller-supplied mutable fields for create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub markdown: String,
    pub tag_ids: Vec<TagId>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, markdown: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            markdown: markdown.into(),
            tag_ids: Vec::new(),
        }
    }

    /// Sets the referenced tags, replacing any previous value.
    pub fn tags(mut self, tag_ids: impl IntoIterator<Item = TagId>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }
}

/// Read-only note view with live tags embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNote {
    pub id: NoteId,
    pub title: String,
    pub markdown: String,
    pub tags: Vec<Tag>,
}

impl ResolvedNote {
    /// Labels of the embedded tags, in note order.
    pub fn tag_labels(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.label.as_str()).collect()
    }
}

/// Drops repeated ids, keeping the first occurrence of each.
pub fn dedup_tag_ids(tag_ids: Vec<TagId>) -> Vec<TagId> {
    let mut seen = HashSet::with_capacity(tag_ids.len());
    tag_ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
