//! Read-side projections over notes and tags.
//!
//! # Responsibility
//! - Resolve tag references into live tags for display.
//! - Filter notes by title substring and required tags.
//!
//! # Invariants
//! - Functions here are pure; inputs are never mutated.
//! - Output order follows input note order.
//! - Tag matching is by id, never by label.

pub mod filter;
