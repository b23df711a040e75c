//! Persistence boundary for notebook snapshots.
//!
//! # Responsibility
//! - Define the key-value contract the notebook writes through.
//! - Encode/decode the canonical persisted form (notes hold tag ids).
//!
//! # Invariants
//! - Values crossing the boundary are JSON.
//! - Resolved notes are never persisted.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv_store;
pub mod snapshot;

/// Storage key holding the tag array.
pub const TAGS_KEY: &str = "TAGS";
/// Storage key holding the raw note array.
pub const NOTES_KEY: &str = "NOTES";

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure raised by a storage medium or while decoding its contents.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Json(serde_json::Error),
    InvalidData(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "snapshot encoding failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
