//! Track list storage and resolution.
//!
//! - [`schema`] - Persisted document shapes
//! - [`paths`] - Label to directory/URL templating
//! - [`registry`] - Upsert, lookup and listing of tracks

pub mod paths;
pub mod registry;
pub mod schema;

pub use paths::{validate_label, PathTemplate, TrackLocation};
pub use registry::TrackRegistry;
pub use schema::{RefSeqRecord, TrackListDocument, TrackRecord};
