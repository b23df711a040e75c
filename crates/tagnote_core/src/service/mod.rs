//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry, store and persistence calls into intent-level APIs.
//! - Keep display layers decoupled from storage details.

pub mod notebook;
