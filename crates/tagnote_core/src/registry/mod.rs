//! Tag registry.
//!
//! # Responsibility
//! - Own the canonical set of tags for one notebook.
//!
//! # Invariants
//! - Tag ids are unique within a registry.
//! - The registry never touches notes; cascades belong to the caller.

pub mod tag_registry;
