//! Track handlers and their construction.
//!
//! A handler is the runtime object behind a track record. The registry never
//! inspects handlers beyond building them: it hands every handler the same
//! [`HandlerContext`] (storage directory, base URL, label, configuration,
//! display key and optional client subtype) and treats construction failure
//! as fatal.
//!
//! Handlers are selected by type name through [`HandlerRegistry`], which
//! falls back to less specific ancestors when a dotted type such as
//! `ImageTrack.Wiggle.Frobnicated` has no handler of its own.

pub mod builtin;
pub mod resolver;

pub use builtin::{FeatureTrack, ImageTrack};
pub use resolver::{fallback_chain, normalize_type, HandlerEntry, HandlerRegistry, ResolvedType};

use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Result, TrackDbError};
use crate::tracks::paths::{substitute_refseq_path, substitute_refseq_url};

/// Constructor registered for a handler type.
pub type HandlerFactory = fn(HandlerContext) -> Result<Box<dyn TrackHandler>>;

/// Everything a handler is constructed from.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerContext {
    /// Storage directory, still containing `{refseq}`.
    pub storage_dir: PathBuf,
    /// Public base URL, still containing `{refseq}`.
    pub base_url: String,
    /// Track label.
    pub label: String,
    /// Track configuration (the full record when resolved from the track list).
    pub config: Map<String, Value>,
    /// Display key.
    pub key: String,
    /// Client-side class override.
    pub handler_subtype: Option<String>,
}

/// Built-in track families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackKind {
    /// Feature tracks (genes, alignments, variants).
    Feature,
    /// Pre-rendered image tracks (wiggle, coverage).
    Image,
}

impl TrackKind {
    /// Handler type implementing the family by default.
    pub fn canonical_type(&self) -> &'static str {
        match self {
            Self::Feature => "FeatureTrack",
            Self::Image => "ImageTrack",
        }
    }

    /// All families.
    pub fn all() -> [TrackKind; 2] {
        [Self::Feature, Self::Image]
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feature => write!(f, "feature"),
            Self::Image => write!(f, "image"),
        }
    }
}

impl FromStr for TrackKind {
    type Err = TrackDbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "feature" => Ok(Self::Feature),
            "image" => Ok(Self::Image),
            _ => Err(TrackDbError::UnknownTrackKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Runtime behaviour attached to a track.
pub trait TrackHandler: fmt::Debug + Send + Sync {
    /// Registered type name that produced this handler.
    fn type_name(&self) -> &str;

    /// Family the handler belongs to.
    fn kind(&self) -> TrackKind;

    /// Context the handler was constructed from.
    fn context(&self) -> &HandlerContext;

    fn label(&self) -> &str {
        &self.context().label
    }

    fn key(&self) -> &str {
        &self.context().key
    }

    fn config(&self) -> &Map<String, Value> {
        &self.context().config
    }

    fn storage_dir(&self) -> &Path {
        &self.context().storage_dir
    }

    fn base_url(&self) -> &str {
        &self.context().base_url
    }

    /// Class name the client should instantiate for this track.
    fn client_class(&self) -> &str {
        self.context()
            .handler_subtype
            .as_deref()
            .unwrap_or_else(|| self.type_name())
    }

    /// Storage directory for one reference sequence.
    fn storage_dir_for(&self, refseq: &str) -> PathBuf {
        substitute_refseq_path(self.storage_dir(), refseq)
    }

    /// Public URL for one reference sequence.
    fn url_for(&self, refseq: &str) -> String {
        substitute_refseq_url(self.base_url(), refseq)
    }
}
