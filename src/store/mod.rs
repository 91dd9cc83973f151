//! Document storage for registry data.
//!
//! Documents are JSON files addressed by a `/`-separated path relative to a
//! data root. Reads never block; every mutation goes through
//! [`JsonStore::modify`], which holds an exclusive lock on the document for
//! the whole read-transform-write cycle.

pub mod json;
pub mod lock;

pub use json::JsonStore;
pub use lock::LockGuard;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming a document failed.
    #[error("Storage failure at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document exists but is not valid JSON for the expected shape.
    #[error("Corrupt document at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document could not be serialized for writing.
    #[error("Failed to serialize document for {path}: {source}")]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document lock could not be acquired.
    #[error("Failed to lock {path}: {source}")]
    Lock {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// Path of the document (or lock file) the failure relates to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Corrupt { path, .. }
            | Self::Serialize { path, .. }
            | Self::Lock { path, .. } => path,
        }
    }
}
