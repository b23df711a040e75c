//! Note store.
//!
//! # Responsibility
//! - Own note records and their tag references.
//! - Provide the cascade step that strips a deleted tag from every note.
//!
//! # Invariants
//! - Note ids are unique within a store.
//! - `update_note` is a full replacement of title, markdown and tags.

pub mod note_store;
