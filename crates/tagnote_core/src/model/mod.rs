//! Note/tag domain model.
//!
//! # Responsibility
//! - Define the canonical records owned by the registry and note store.
//! - Define the read-only projection handed to display layers.
//!
//! # Invariants
//! - Notes reference tags by `TagId` only; they never own `Tag` values.
//! - `ResolvedNote` is derived on read and never persisted.

pub mod ids;
pub mod note;
pub mod tag;
