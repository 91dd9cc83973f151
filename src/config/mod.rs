//! Dataset configuration.
//!
//! A dataset may carry an optional `trackdb.yml` in its data root:
//!
//! ```yaml
//! url_prefix: data
//! type_aliases:
//!   HTMLFeatures: FeatureTrack
//! htaccess_extensions: [json, txt]
//! ```
//!
//! Every key is optional; a missing file yields [`DatasetConfig::default`].
//!
//! # Example
//!
//! ```
//! use trackdb::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("trackdb.yml"), "url_prefix: data").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.url_prefix, "data");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{config_path, load_config, load_config_file, parse_config, CONFIG_FILE};
pub use schema::{validate, DatasetConfig};
