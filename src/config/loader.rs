//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{validate, DatasetConfig};
use crate::error::{Result, TrackDbError};

/// File name of the dataset config inside the data root.
pub const CONFIG_FILE: &str = "trackdb.yml";

/// Path of the dataset config for `data_root`.
pub fn config_path(data_root: &Path) -> PathBuf {
    data_root.join(CONFIG_FILE)
}

/// Load and validate a single config file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DatasetConfig> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, path)?;
    validate(&config)?;
    Ok(config)
}

/// Parse YAML content into a `DatasetConfig`.
///
/// An empty document parses to the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<DatasetConfig> {
    if content.trim().is_empty() {
        return Ok(DatasetConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| TrackDbError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit override must exist. Without one, `trackdb.yml` in the data
/// root is used when present and the defaults otherwise.
pub fn load_config(data_root: &Path, config_override: Option<&Path>) -> Result<DatasetConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {:?}", path);
        return load_config_file(path);
    }

    let path = config_path(data_root);
    if path.is_file() {
        tracing::debug!("Loading config from {:?}", path);
        load_config_file(&path)
    } else {
        tracing::debug!("No config at {:?}, using defaults", path);
        Ok(DatasetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn loads_config_from_data_root() {
        let temp = TempDir::new().unwrap();
        fs::write(config_path(temp.path()), "url_prefix: data\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config.url_prefix, "data");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(config_path(temp.path()), "\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();

        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn override_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("other.yml");

        let result = load_config(temp.path(), Some(&missing));

        assert!(matches!(result, Err(TrackDbError::Io(_))));
    }

    #[test]
    fn override_takes_precedence() {
        let temp = TempDir::new().unwrap();
        fs::write(config_path(temp.path()), "url_prefix: root\n").unwrap();
        let other = temp.path().join("other.yml");
        fs::write(&other, "url_prefix: other\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();

        assert_eq!(config.url_prefix, "other");
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let temp = TempDir::new().unwrap();
        fs::write(config_path(temp.path()), "url_prefix: [unclosed\n").unwrap();

        let result = load_config(temp.path(), None);

        match result {
            Err(TrackDbError::ConfigParseError { path, .. }) => {
                assert_eq!(path, config_path(temp.path()));
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn invalid_values_fail_validation() {
        let temp = TempDir::new().unwrap();
        fs::write(
            config_path(temp.path()),
            "htaccess_extensions: [\"j s\"]\n",
        )
        .unwrap();

        let result = load_config(temp.path(), None);

        assert!(matches!(
            result,
            Err(TrackDbError::ConfigValidationError { .. })
        ));
    }
}
