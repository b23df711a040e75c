//! In-memory note store.

use crate::model::ids::{NoteId, TagId};
use crate::model::note::{dedup_tag_ids, Note, NoteDraft};
use std::collections::HashSet;

/// Insertion-ordered collection of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted notes.
    ///
    /// Later entries repeating an earlier id are dropped, and repeated tag
    /// ids within a note collapse to their first occurrence.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        let mut seen = HashSet::with_capacity(notes.len());
        let notes = notes
            .into_iter()
            .filter(|note| seen.insert(note.id))
            .map(|mut note| {
                note.tag_ids = dedup_tag_ids(note.tag_ids);
                note
            })
            .collect();
        Self { notes }
    }

    /// Stores a new note with a fresh id and returns it.
    pub fn create_note(&mut self, draft: NoteDraft) -> Note {
        let note = Note::from_draft(NoteId::new(), draft);
        self.notes.push(note.clone());
        note
    }

    /// Replaces the mutable fields of `id`. Returns `false` when `id` is unknown.
    pub fn update_note(&mut self, id: NoteId, draft: NoteDraft) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.apply(draft);
                true
            }
            None => false,
        }
    }

    /// Removes `id`. Returns `false` when `id` is unknown.
    pub fn delete_note(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    /// Removes `tag_id` from every note. Returns how many notes changed.
    pub fn remove_tag_reference(&mut self, tag_id: TagId) -> usize {
        self.retain_tag_references(|id| id != tag_id)
    }

    /// Keeps only the tag ids accepted by `keep`. Returns how many notes changed.
    pub fn retain_tag_references(&mut self, mut keep: impl FnMut(TagId) -> bool) -> usize {
        let mut touched = 0;
        for note in &mut self.notes {
            let before = note.tag_ids.len();
            note.tag_ids.retain(|id| keep(*id));
            if note.tag_ids.len() != before {
                touched += 1;
            }
        }
        touched
    }

    /// Read-only view in insertion order.
    pub fn list_notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
