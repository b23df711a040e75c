//! Core data layer for tagnote.
//! Owns notes, tags, the association between them and title/tag filtering.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod query;
pub mod registry;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{default_log_level, ConfigError, CoreConfig, LogConfig};
pub use logging::{init_logging, logging_status};
pub use model::ids::{NoteId, TagId};
pub use model::note::{Note, NoteDraft, ResolvedNote};
pub use model::tag::Tag;
pub use persist::kv_store::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use persist::snapshot::Snapshot;
pub use persist::{PersistError, PersistResult, NOTES_KEY, TAGS_KEY};
pub use query::filter::{filter, matches, resolve, NoteFilter};
pub use registry::tag_registry::TagRegistry;
pub use seed::{SeedData, SeedNote, SeedTag};
pub use service::notebook::{Notebook, NotebookError, NotebookResult};
pub use store::note_store::NoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
