//! Canonical persisted pair of tags and raw notes.

use crate::model::note::Note;
use crate::model::tag::Tag;
use crate::persist::kv_store::KeyValueStore;
use crate::persist::{PersistResult, NOTES_KEY, TAGS_KEY};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Full notebook contents in persisted form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub tags: Vec<Tag>,
    pub notes: Vec<Note>,
}

impl Snapshot {
    /// Reads both keys from `store`.
    ///
    /// Returns `None` when neither key exists (first run). A single missing
    /// key reads as an empty list.
    pub fn load(store: &impl KeyValueStore) -> PersistResult<Option<Self>> {
        let tags = store.load(TAGS_KEY)?;
        let notes = store.load(NOTES_KEY)?;
        if tags.is_none() && notes.is_none() {
            return Ok(None);
        }

        Ok(Some(Self {
            tags: decode_list(tags)?,
            notes: decode_list(notes)?,
        }))
    }

    /// Writes both keys to `store`, tags first.
    pub fn save(&self, store: &mut impl KeyValueStore) -> PersistResult<()> {
        store.save(TAGS_KEY, &serde_json::to_value(&self.tags)?)?;
        store.save(NOTES_KEY, &serde_json::to_value(&self.notes)?)?;
        Ok(())
    }
}

fn decode_list<T: DeserializeOwned>(value: Option<Value>) -> PersistResult<Vec<T>> {
    match value {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}
