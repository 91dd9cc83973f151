//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, TrackDbError};

/// Settings for one dataset directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Prefix prepended to public track URLs.
    pub url_prefix: String,

    /// Extra type names mapped onto registered handler types.
    pub type_aliases: BTreeMap<String, String>,

    /// Extensions of pre-compressed files served by the web server.
    pub htaccess_extensions: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            url_prefix: String::new(),
            type_aliases: BTreeMap::new(),
            htaccess_extensions: vec!["json".to_string(), "txt".to_string()],
        }
    }
}

/// Check values that deserialize fine but cannot be used.
pub fn validate(config: &DatasetConfig) -> Result<()> {
    if config.url_prefix.contains("{tracklabel}") || config.url_prefix.contains("{refseq}") {
        return Err(TrackDbError::ConfigValidationError {
            message: format!(
                "url_prefix '{}' must not contain template placeholders",
                config.url_prefix
            ),
        });
    }

    for (alias, target) in &config.type_aliases {
        if alias.trim().is_empty() || target.trim().is_empty() {
            return Err(TrackDbError::ConfigValidationError {
                message: format!("type alias '{}: {}' has an empty side", alias, target),
            });
        }
    }

    for ext in &config.htaccess_extensions {
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(TrackDbError::ConfigValidationError {
                message: format!("htaccess extension '{}' must be alphanumeric", ext),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DatasetConfig::default();
        assert_eq!(config.url_prefix, "");
        assert!(config.type_aliases.is_empty());
        assert_eq!(config.htaccess_extensions, vec!["json", "txt"]);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: DatasetConfig = serde_yaml::from_str("url_prefix: data").unwrap();
        assert_eq!(config.url_prefix, "data");
        assert_eq!(config.htaccess_extensions, vec!["json", "txt"]);
    }

    #[test]
    fn parses_aliases() {
        let yaml = "type_aliases:\n  HTMLFeatures: FeatureTrack\n";
        let config: DatasetConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.type_aliases["HTMLFeatures"], "FeatureTrack");
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&DatasetConfig::default()).is_ok());
    }

    #[test]
    fn rejects_placeholder_in_prefix() {
        let config = DatasetConfig {
            url_prefix: "data/{refseq}".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate(&config),
            Err(TrackDbError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn rejects_bad_extension() {
        let config = DatasetConfig {
            htaccess_extensions: vec!["js(on".to_string()],
            ..Default::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_empty_alias() {
        let mut config = DatasetConfig::default();
        config
            .type_aliases
            .insert("".to_string(), "FeatureTrack".to_string());
        assert!(validate(&config).is_err());
    }
}
