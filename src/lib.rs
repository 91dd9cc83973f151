//! trackdb - Track registry for genome-browser datasets.
//!
//! A dataset directory holds `trackList.json`, an ordered list of track
//! records, and `seq/refSeqs.json`, the reference sequences. This crate
//! upserts and looks up track records, maps track labels onto storage
//! directories and URLs, and resolves dotted track types to handlers with
//! fallback to less specific ancestors.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Dataset configuration loading
//! - [`error`] - Error types and result aliases
//! - [`handlers`] - Track handlers and type resolution
//! - [`htaccess`] - Apache config for pre-compressed track data
//! - [`store`] - Atomic JSON document storage
//! - [`tracks`] - Track list schema, path templating and the registry
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use trackdb::tracks::{TrackRecord, TrackRegistry};
//! use serde_json::Map;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let registry = TrackRegistry::new(temp.path());
//!
//! registry
//!     .upsert_track(TrackRecord::new("wig", "Coverage", "ImageTrack.Wiggle", Map::new()))
//!     .unwrap();
//!
//! let handler = registry.lookup_track("wig").unwrap().unwrap();
//! assert_eq!(handler.type_name(), "ImageTrack");
//! assert_eq!(handler.url_for("chr1"), "tracks/wig/chr1");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod htaccess;
pub mod store;
pub mod tracks;
pub mod ui;

pub use error::{Result, TrackDbError};
