//! Notebook orchestration over the tag registry, note store and storage.
//!
//! # Responsibility
//! - Hydrate from storage at open and seed an empty medium on first run.
//! - Route intents to the registry/store and cascade tag deletion.
//! - Write the full snapshot back after every mutation that changed state.
//!
//! # Invariants
//! - After any completed call, every note tag id references a live tag.
//! - Absent ids are no-ops: they return `false` and do not write.
//! - Tag labels are validated only at commit (`commit_tag_labels`).

use crate::config::CoreConfig;
use crate::model::ids::{NoteId, TagId};
use crate::model::note::{Note, NoteDraft, ResolvedNote};
use crate::model::tag::Tag;
use crate::persist::kv_store::{KeyValueStore, SqliteKeyValueStore};
use crate::persist::snapshot::Snapshot;
use crate::persist::PersistError;
use crate::query::filter::{self, NoteFilter};
use crate::registry::tag_registry::TagRegistry;
use crate::seed::SeedData;
use crate::store::note_store::NoteStore;
use log::{debug, error, info, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Error for notebook use-cases.
#[derive(Debug)]
pub enum NotebookError {
    /// Storage medium failed to load or save.
    Persist(PersistError),
    /// A tag label is empty or whitespace-only at commit time.
    EmptyTagLabel(TagId),
}

impl Display for NotebookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persist(err) => write!(f, "{err}"),
            Self::EmptyTagLabel(tag_id) => write!(f, "tag cannot be empty: {tag_id}"),
        }
    }
}

impl Error for NotebookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(err) => Some(err),
            Self::EmptyTagLabel(_) => None,
        }
    }
}

impl From<PersistError> for NotebookError {
    fn from(value: PersistError) -> Self {
        Self::Persist(value)
    }
}

pub type NotebookResult<T> = Result<T, NotebookError>;

/// One user's notes and tags bound to a storage medium.
pub struct Notebook<S: KeyValueStore> {
    tags: TagRegistry,
    notes: NoteStore,
    store: S,
}

impl Notebook<SqliteKeyValueStore> {
    /// Opens the SQLite medium named by `config` (in-memory when no path).
    ///
    /// Seeds the stock content on first run when `seed_on_first_run` is set.
    /// Logging is not initialized here; see [`crate::init_logging`].
    pub fn from_config(config: &CoreConfig) -> NotebookResult<Self> {
        let store = match config.db_path.as_ref() {
            Some(path) => SqliteKeyValueStore::open(path)?,
            None => SqliteKeyValueStore::open_in_memory()?,
        };

        if config.seed_on_first_run {
            Self::open_or_seed(store, &SeedData::default_content())
        } else {
            Self::open(store)
        }
    }
}

impl<S: KeyValueStore> Notebook<S> {
    /// Hydrates from `store`. An empty medium yields an empty notebook.
    pub fn open(store: S) -> NotebookResult<Self> {
        let snapshot = load_snapshot(&store)?.unwrap_or_default();
        Ok(Self::hydrate(store, snapshot))
    }

    /// Hydrates from `store`, or materializes `seed` and persists it when the
    /// medium holds nothing yet.
    pub fn open_or_seed(store: S, seed: &SeedData) -> NotebookResult<Self> {
        if let Some(snapshot) = load_snapshot(&store)? {
            return Ok(Self::hydrate(store, snapshot));
        }

        let mut notebook = Self {
            tags: TagRegistry::new(),
            notes: NoteStore::new(),
            store,
        };
        notebook.materialize(seed);
        notebook.persist("notebook_seed")?;
        info!(
            "event=notebook_seed module=service status=ok tags={} notes={}",
            notebook.tags.len(),
            notebook.notes.len()
        );
        Ok(notebook)
    }

    fn hydrate(store: S, snapshot: Snapshot) -> Self {
        let tags = TagRegistry::from_tags(snapshot.tags);
        let mut notes = NoteStore::from_notes(snapshot.notes);
        let pruned = notes.retain_tag_references(|id| tags.contains(id));
        if pruned > 0 {
            warn!("event=hydrate_prune module=service status=ok notes_touched={pruned}");
        }

        info!(
            "event=notebook_open module=service status=ok tags={} notes={}",
            tags.len(),
            notes.len()
        );
        Self { tags, notes, store }
    }

    fn materialize(&mut self, seed: &SeedData) {
        let mut ids_by_key: HashMap<&str, TagId> = HashMap::with_capacity(seed.tags.len());
        for seed_tag in &seed.tags {
            let tag = self.tags.add_tag(seed_tag.label.as_str());
            ids_by_key.insert(seed_tag.key.as_str(), tag.id);
        }

        for seed_note in &seed.notes {
            let tag_ids = seed_note
                .tag_keys
                .iter()
                .filter_map(|key| ids_by_key.get(key.as_str()).copied());
            self.notes.create_note(
                NoteDraft::new(seed_note.title.as_str(), seed_note.markdown.as_str()).tags(tag_ids),
            );
        }
    }

    /// Adds a tag with a fresh id. The label is not validated.
    pub fn create_tag(&mut self, label: impl Into<String>) -> NotebookResult<Tag> {
        let tag = self.tags.add_tag(label);
        self.persist("tag_create")?;
        info!("event=tag_create module=service status=ok tag_id={}", tag.id);
        Ok(tag)
    }

    /// Renames a tag. Returns `false` without writing when `id` is unknown.
    pub fn update_tag(&mut self, id: TagId, label: impl Into<String>) -> NotebookResult<bool> {
        if !self.tags.update_tag(id, label) {
            debug!("event=tag_update module=service status=noop tag_id={id}");
            return Ok(false);
        }
        self.persist("tag_update")?;
        info!("event=tag_update module=service status=ok tag_id={id}");
        Ok(true)
    }

    /// Deletes a tag and strips it from every note.
    pub fn delete_tag(&mut self, id: TagId) -> NotebookResult<bool> {
        if !self.tags.delete_tag(id) {
            debug!("event=tag_delete module=service status=noop tag_id={id}");
            return Ok(false);
        }
        let touched = self.notes.remove_tag_reference(id);
        self.persist("tag_delete")?;
        info!("event=tag_delete module=service status=ok tag_id={id} notes_touched={touched}");
        Ok(true)
    }

    /// Rejects the current tag set if any label is empty or whitespace-only.
    ///
    /// Reports the first offending tag in registry order.
    pub fn commit_tag_labels(&self) -> NotebookResult<()> {
        match self.tags.list_tags().iter().find(|tag| tag.has_blank_label()) {
            Some(tag) => Err(NotebookError::EmptyTagLabel(tag.id)),
            None => Ok(()),
        }
    }

    /// Creates a note. Tag ids with no live tag are dropped.
    pub fn create_note(&mut self, draft: NoteDraft) -> NotebookResult<Note> {
        let draft = self.retain_live_tags(draft);
        let note = self.notes.create_note(draft);
        self.persist("note_create")?;
        info!(
            "event=note_create module=service status=ok note_id={} tags={}",
            note.id,
            note.tag_ids.len()
        );
        Ok(note)
    }

    /// Replaces title, markdown and tags of a note.
    ///
    /// Returns `false` without writing when `id` is unknown.
    pub fn update_note(&mut self, id: NoteId, draft: NoteDraft) -> NotebookResult<bool> {
        let draft = self.retain_live_tags(draft);
        if !self.notes.update_note(id, draft) {
            debug!("event=note_update module=service status=noop note_id={id}");
            return Ok(false);
        }
        self.persist("note_update")?;
        info!("event=note_update module=service status=ok note_id={id}");
        Ok(true)
    }

    /// Deletes a note. Returns `false` without writing when `id` is unknown.
    pub fn delete_note(&mut self, id: NoteId) -> NotebookResult<bool> {
        if !self.notes.delete_note(id) {
            debug!("event=note_delete module=service status=noop note_id={id}");
            return Ok(false);
        }
        self.persist("note_delete")?;
        info!("event=note_delete module=service status=ok note_id={id}");
        Ok(true)
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.list_tags()
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.list_notes()
    }

    /// Resolved view of one note, if it exists.
    pub fn note(&self, id: NoteId) -> Option<ResolvedNote> {
        self.notes
            .get(id)
            .map(|note| filter::resolve(note, &self.tags))
    }

    /// Resolved notes matching `criteria`, in note order.
    pub fn filter(&self, criteria: &NoteFilter) -> Vec<ResolvedNote> {
        filter::filter(self.notes.list_notes(), &self.tags, criteria)
    }

    /// Current contents in persisted form.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tags: self.tags.list_tags().to_vec(),
            notes: self.notes.list_notes().to_vec(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn retain_live_tags(&self, mut draft: NoteDraft) -> NoteDraft {
        let before = draft.tag_ids.len();
        draft.tag_ids.retain(|id| self.tags.contains(*id));
        let dropped = before - draft.tag_ids.len();
        if dropped > 0 {
            debug!("event=draft_prune module=service status=ok dropped_tags={dropped}");
        }
        draft
    }

    fn persist(&mut self, cause: &str) -> NotebookResult<()> {
        let started_at = Instant::now();
        match self.snapshot().save(&mut self.store) {
            Ok(()) => {
                debug!(
                    "event=persist_save module=persist status=ok cause={} duration_ms={}",
                    cause,
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=persist_save module=persist status=error cause={} duration_ms={} error={}",
                    cause,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

fn load_snapshot(store: &impl KeyValueStore) -> NotebookResult<Option<Snapshot>> {
    Snapshot::load(store).map_err(|err| {
        error!("event=notebook_open module=service status=error error={err}");
        NotebookError::from(err)
    })
}
