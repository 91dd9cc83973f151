//! Error types for track registry operations.
//!
//! This module defines [`TrackDbError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing track is not an error: lookups return `Ok(None)`
//! - Corrupt registry state (duplicate labels) is fatal and never resolved silently
//! - Storage failures are propagated verbatim from the document store
//! - Use `anyhow::Error` (via `TrackDbError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::store::StoreError;

/// Core error type for track registry operations.
#[derive(Debug, Error)]
pub enum TrackDbError {
    /// More than one record in the track list shares a label.
    #[error("Track list is corrupt: {count} records share the label '{label}'")]
    InvariantViolation { label: String, count: usize },

    /// No candidate in the type fallback chain has a registered handler.
    #[error("Unknown track type '{type_name}' (tried: {})", .candidates.join(", "))]
    UnresolvableType {
        type_name: String,
        candidates: Vec<String>,
    },

    /// Track label cannot be mapped onto a storage path.
    #[error("Invalid track label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },

    /// Requested built-in track family does not exist.
    #[error("Unknown track kind: {kind}")]
    UnknownTrackKind { kind: String },

    /// A handler refused to construct itself from the given record.
    #[error("Failed to construct handler '{type_name}': {message}")]
    HandlerConstruction { type_name: String, message: String },

    /// Failure reported by the document store.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// Failed to parse the dataset configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for track registry operations.
pub type Result<T> = std::result::Result<T, TrackDbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invariant_violation_displays_label_and_count() {
        let err = TrackDbError::InvariantViolation {
            label: "genes".into(),
            count: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("genes"));
        assert!(msg.contains("2 records"));
    }

    #[test]
    fn unresolvable_type_lists_candidates() {
        let err = TrackDbError::UnresolvableType {
            type_name: "Foo.Bar".into(),
            candidates: vec!["Foo::Bar".into(), "Foo".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Foo.Bar"));
        assert!(msg.contains("Foo::Bar, Foo"));
    }

    #[test]
    fn invalid_label_displays_reason() {
        let err = TrackDbError::InvalidLabel {
            label: "a/b".into(),
            reason: "contains a path separator".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("a/b"));
        assert!(msg.contains("path separator"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = TrackDbError::ConfigParseError {
            path: PathBuf::from("/data/trackdb.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/trackdb.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = TrackDbError::ConfigValidationError {
            message: "bad extension".into(),
        };
        assert!(err.to_string().contains("bad extension"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TrackDbError = io_err.into();
        assert!(matches!(err, TrackDbError::Io(_)));
    }

    #[test]
    fn store_error_converts_to_storage() {
        let err: TrackDbError = StoreError::Lock {
            path: PathBuf::from("/data/trackList.json.lock"),
            source: std::io::Error::other("busy"),
        }
        .into();
        assert!(matches!(err, TrackDbError::Storage(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TrackDbError::UnknownTrackKind {
                kind: "audio".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
