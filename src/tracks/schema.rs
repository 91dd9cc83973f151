//! Persisted document shapes: the track list and reference sequences.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Relative path of the track list document.
pub const TRACK_LIST_PATH: &str = "trackList.json";

/// Relative path of the reference sequence listing.
pub const REFSEQS_PATH: &str = "seq/refSeqs.json";

/// Top-level track list document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackListDocument {
    /// Schema version.
    #[serde(rename = "formatVersion", default = "default_format_version")]
    pub format_version: u32,

    /// Track records in display order.
    #[serde(default)]
    pub tracks: Vec<TrackRecord>,
}

fn default_format_version() -> u32 {
    TrackListDocument::FORMAT_VERSION
}

impl TrackListDocument {
    /// Current schema version.
    pub const FORMAT_VERSION: u32 = 1;

    /// Empty document used when none has been written yet.
    pub fn empty() -> Self {
        Self {
            format_version: Self::FORMAT_VERSION,
            tracks: Vec::new(),
        }
    }

    /// Indices of every record carrying `label`.
    pub fn positions_of(&self, label: &str) -> Vec<usize> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, track)| track.label == label)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Default for TrackListDocument {
    fn default() -> Self {
        Self::empty()
    }
}

/// One track entry in the track list.
///
/// `label`, `key` and `type` are lifted out of the record; everything else
/// is kept in `config` and passed to handlers as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Unique identifier within the track list.
    pub label: String,

    /// Human-readable display name.
    #[serde(default)]
    pub key: String,

    /// Dotted handler type, e.g. `ImageTrack.Wiggle`.
    #[serde(rename = "type", default)]
    pub track_type: String,

    /// Remaining configuration fields.
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl TrackRecord {
    /// Build a record from identity fields and a configuration map.
    ///
    /// Any `label`, `key` or `type` entries in `config` are dropped in
    /// favour of the explicit arguments.
    pub fn new(
        label: impl Into<String>,
        key: impl Into<String>,
        track_type: impl Into<String>,
        mut config: Map<String, Value>,
    ) -> Self {
        for reserved in ["label", "key", "type"] {
            config.shift_remove(reserved);
        }
        Self {
            label: label.into(),
            key: key.into(),
            track_type: track_type.into(),
            config,
        }
    }

    /// The record as a single JSON object, identity fields included.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        object.insert("label".to_string(), Value::String(self.label.clone()));
        object.insert("key".to_string(), Value::String(self.key.clone()));
        object.insert("type".to_string(), Value::String(self.track_type.clone()));
        for (name, value) in &self.config {
            if !object.contains_key(name) {
                object.insert(name.clone(), value.clone());
            }
        }
        Value::Object(object)
    }
}

/// One reference sequence, as produced by the sequence formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefSeqRecord {
    pub name: String,
    #[serde(rename = "seqDir")]
    pub seq_dir: String,
    pub start: u64,
    pub end: u64,
    pub length: u64,
    #[serde(rename = "seqChunkSize")]
    pub seq_chunk_size: u64,
}
