//! Mapping of track labels to storage directories and public URLs.
//!
//! Every track lives under the fixed template `tracks/{tracklabel}/{refseq}`.
//! The label placeholder is substituted here; the `{refseq}` segment is left
//! in place for handlers to fill in per reference sequence.

use std::path::{Path, PathBuf};

use crate::error::{Result, TrackDbError};

/// Placeholder substituted with the track label.
pub const LABEL_PLACEHOLDER: &str = "{tracklabel}";

/// Placeholder handlers substitute with a reference sequence name.
pub const REFSEQ_PLACEHOLDER: &str = "{refseq}";

/// One segment of a path template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Copied through unchanged.
    Literal(String),
    /// Replaced with the track label.
    Label,
}

/// Storage location and public URL resolved for a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackLocation {
    /// Filesystem directory, still containing `{refseq}`.
    pub dir: PathBuf,
    /// Relative URL, still containing `{refseq}`.
    pub url: String,
}

/// Template that turns track labels into directories and URLs.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    data_root: PathBuf,
    url_prefix: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Standard `tracks/{tracklabel}/{refseq}` template under `data_root`.
    pub fn new(data_root: impl Into<PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
            url_prefix: String::new(),
            segments: vec![
                Segment::Literal("tracks".to_string()),
                Segment::Label,
                Segment::Literal(REFSEQ_PLACEHOLDER.to_string()),
            ],
        }
    }

    /// Prefix every generated URL with `prefix` (e.g. `data/`).
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Get the data root directory.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// The template written out with its placeholders.
    pub fn pattern(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Label => LABEL_PLACEHOLDER,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn substituted<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.segments.iter().map(move |segment| match segment {
            Segment::Literal(text) => text.as_str(),
            Segment::Label => label,
        })
    }

    /// Filesystem directory for `label`.
    pub fn track_dir(&self, label: &str) -> Result<PathBuf> {
        validate_label(label)?;
        Ok(self
            .substituted(label)
            .fold(self.data_root.clone(), |path, segment| path.join(segment)))
    }

    /// Public relative URL for `label`, always `/`-separated.
    pub fn track_url(&self, label: &str) -> Result<String> {
        validate_label(label)?;
        let relative = self.substituted(label).collect::<Vec<_>>().join("/");
        if self.url_prefix.is_empty() {
            Ok(relative)
        } else {
            Ok(format!(
                "{}/{}",
                self.url_prefix.trim_end_matches('/'),
                relative
            ))
        }
    }

    /// Directory and URL for `label` in one call.
    pub fn locate(&self, label: &str) -> Result<TrackLocation> {
        Ok(TrackLocation {
            dir: self.track_dir(label)?,
            url: self.track_url(label)?,
        })
    }
}

/// Reject labels that cannot be used as a single path segment.
pub fn validate_label(label: &str) -> Result<()> {
    let reason = if label.is_empty() {
        Some("label is empty")
    } else if label == "." || label == ".." {
        Some("label is a relative directory reference")
    } else if label.contains('/') || label.contains('\\') {
        Some("label contains a path separator")
    } else if label.contains('\0') {
        Some("label contains a NUL byte")
    } else if label.contains(LABEL_PLACEHOLDER) || label.contains(REFSEQ_PLACEHOLDER) {
        Some("label contains a template placeholder")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(TrackDbError::InvalidLabel {
            label: label.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Replace the `{refseq}` placeholder in a directory path.
pub fn substitute_refseq_path(dir: &Path, refseq: &str) -> PathBuf {
    dir.iter()
        .map(|component| {
            if component == REFSEQ_PLACEHOLDER {
                std::ffi::OsStr::new(refseq)
            } else {
                component
            }
        })
        .collect()
}

/// Replace the `{refseq}` placeholder in a URL.
pub fn substitute_refseq_url(url: &str, refseq: &str) -> String {
    url.replace(REFSEQ_PLACEHOLDER, refseq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_shows_placeholders() {
        let template = PathTemplate::new("/data");
        assert_eq!(template.pattern(), "tracks/{tracklabel}/{refseq}");
    }

    #[test]
    fn track_dir_joins_data_root() {
        let template = PathTemplate::new("/data");
        let dir = template.track_dir("genes").unwrap();
        assert_eq!(
            dir,
            PathBuf::from("/data")
                .join("tracks")
                .join("genes")
                .join("{refseq}")
        );
    }

    #[test]
    fn track_url_uses_forward_slashes() {
        let template = PathTemplate::new("/data");
        assert_eq!(
            template.track_url("genes").unwrap(),
            "tracks/genes/{refseq}"
        );
    }

    #[test]
    fn track_url_applies_prefix() {
        let template = PathTemplate::new("/data").with_url_prefix("data/");
        assert_eq!(
            template.track_url("genes").unwrap(),
            "data/tracks/genes/{refseq}"
        );
    }

    #[test]
    fn locate_returns_both() {
        let template = PathTemplate::new("/data");
        let location = template.locate("snps").unwrap();
        assert!(location.dir.ends_with("tracks/snps/{refseq}"));
        assert_eq!(location.url, "tracks/snps/{refseq}");
    }

    #[test]
    fn rejects_path_separators() {
        let template = PathTemplate::new("/data");
        assert!(matches!(
            template.track_dir("../etc"),
            Err(TrackDbError::InvalidLabel { .. })
        ));
        assert!(template.track_url("a\\b").is_err());
    }

    #[test]
    fn rejects_placeholders_and_empty() {
        assert!(validate_label("").is_err());
        assert!(validate_label("..").is_err());
        assert!(validate_label("x{tracklabel}").is_err());
        assert!(validate_label("{refseq}").is_err());
        assert!(validate_label("ok label_1.v2").is_ok());
    }

    #[test]
    fn substitutes_refseq() {
        let template = PathTemplate::new("/data");
        let location = template.locate("genes").unwrap();

        assert_eq!(
            substitute_refseq_path(&location.dir, "chr1"),
            PathBuf::from("/data/tracks/genes/chr1")
        );
        assert_eq!(
            substitute_refseq_url(&location.url, "chr1"),
            "tracks/genes/chr1"
        );
    }
}
