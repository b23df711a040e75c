//! Title/tag note filtering.

use crate::model::ids::TagId;
use crate::model::note::{Note, ResolvedNote};
use crate::registry::tag_registry::TagRegistry;

/// Filter criteria for [`filter`].
///
/// The neutral filter (empty title, no tags) matches every note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Case-insensitive title substring. Not trimmed.
    pub title_query: String,
    /// Every listed tag must be present on a matching note.
    pub required_tags: Vec<TagId>,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, query: impl Into<String>) -> Self {
        self.title_query = query.into();
        self
    }

    pub fn require_tag(mut self, tag_id: TagId) -> Self {
        self.required_tags.push(tag_id);
        self
    }

    pub fn is_neutral(&self) -> bool {
        self.title_query.is_empty() && self.required_tags.is_empty()
    }
}

/// Embeds the live tags referenced by `note`.
///
/// Ids with no tag in `registry` are skipped.
pub fn resolve(note: &Note, registry: &TagRegistry) -> ResolvedNote {
    ResolvedNote {
        id: note.id,
        title: note.title.clone(),
        markdown: note.markdown.clone(),
        tags: note
            .tag_ids
            .iter()
            .filter_map(|id| registry.get(*id).cloned())
            .collect(),
    }
}

/// Returns whether `note` satisfies both the title and the tag criteria.
pub fn matches(note: &Note, filter: &NoteFilter) -> bool {
    title_matches(&note.title, &filter.title_query)
        && filter.required_tags.iter().all(|id| note.has_tag(*id))
}

/// Resolves the notes matching `filter`, keeping their relative order.
pub fn filter(notes: &[Note], registry: &TagRegistry, filter: &NoteFilter) -> Vec<ResolvedNote> {
    notes
        .iter()
        .filter(|note| matches(note, filter))
        .map(|note| resolve(note, registry))
        .collect()
}

fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}
