//! The track registry.
//!
//! Owns `trackList.json` and turns its records into handlers. Nothing is
//! cached between calls: every operation re-reads the document, and every
//! mutation is a single [`JsonStore::modify`] so concurrent writers cannot
//! lose each other's updates.

use serde_json::{Map, Value};
use std::path::Path;

use crate::config::DatasetConfig;
use crate::error::{Result, TrackDbError};
use crate::handlers::{HandlerContext, HandlerRegistry, TrackHandler, TrackKind};
use crate::store::JsonStore;

use super::paths::{validate_label, PathTemplate};
use super::schema::{RefSeqRecord, TrackListDocument, TrackRecord, REFSEQS_PATH, TRACK_LIST_PATH};

/// Registry of the tracks in one dataset directory.
#[derive(Debug, Clone)]
pub struct TrackRegistry {
    store: JsonStore,
    paths: PathTemplate,
    handlers: HandlerRegistry,
}

impl TrackRegistry {
    /// Registry over `data_root` with the built-in handlers.
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        let root = data_root.as_ref();
        Self {
            store: JsonStore::new(root),
            paths: PathTemplate::new(root),
            handlers: HandlerRegistry::with_builtins(),
        }
    }

    /// Registry configured from a dataset config.
    ///
    /// Applies the URL prefix and registers configured type aliases.
    pub fn from_config(data_root: impl AsRef<Path>, config: &DatasetConfig) -> Result<Self> {
        let mut registry = Self::new(data_root);
        registry.paths = registry.paths.with_url_prefix(config.url_prefix.clone());

        for (alias, target) in &config.type_aliases {
            registry.handlers.register_alias(alias, target)?;
        }

        Ok(registry)
    }

    /// Replace the handler registry.
    pub fn with_handlers(mut self, handlers: HandlerRegistry) -> Self {
        self.handlers = handlers;
        self
    }

    /// Get the path template.
    pub fn paths(&self) -> &PathTemplate {
        &self.paths
    }

    /// Get the handler registry.
    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    /// Mutable access to the handler registry.
    pub fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }

    /// Read the current track list (empty if never written).
    pub fn document(&self) -> Result<TrackListDocument> {
        let document: TrackListDocument =
            self.store.get(TRACK_LIST_PATH, TrackListDocument::empty)?;
        if document.format_version != TrackListDocument::FORMAT_VERSION {
            tracing::warn!(
                "Track list has formatVersion {}, expected {}",
                document.format_version,
                TrackListDocument::FORMAT_VERSION
            );
        }
        Ok(document)
    }

    /// Insert or replace a track record.
    ///
    /// A record with an existing label keeps its position; a new label is
    /// appended. Fails without writing if the list already holds more than
    /// one record with this label.
    pub fn upsert_track(&self, record: TrackRecord) -> Result<()> {
        validate_label(&record.label)?;
        let label = record.label.clone();

        self.store.modify(
            TRACK_LIST_PATH,
            TrackListDocument::empty,
            |mut document: TrackListDocument| {
                match single_position(&document, &label)? {
                    Some(index) => {
                        tracing::debug!("Replacing track '{}' at position {}", label, index);
                        document.tracks[index] = record;
                    }
                    None => {
                        tracing::debug!(
                            "Appending track '{}' at position {}",
                            label,
                            document.tracks.len()
                        );
                        document.tracks.push(record);
                    }
                }
                Ok::<_, TrackDbError>(document)
            },
        )?;

        tracing::info!("Stored track '{}'", label);
        Ok(())
    }

    /// Remove the record with `label`, returning whether one existed.
    pub fn remove_track(&self, label: &str) -> Result<bool> {
        let mut removed = false;

        self.store.modify(
            TRACK_LIST_PATH,
            TrackListDocument::empty,
            |mut document: TrackListDocument| {
                if let Some(index) = single_position(&document, label)? {
                    document.tracks.remove(index);
                    removed = true;
                }
                Ok::<_, TrackDbError>(document)
            },
        )?;

        if removed {
            tracing::info!("Removed track '{}'", label);
        } else {
            tracing::debug!("Track '{}' not present, nothing removed", label);
        }
        Ok(removed)
    }

    /// Resolve the track with `label` to a handler.
    ///
    /// Returns `Ok(None)` when no record carries the label. The handler gets
    /// the full record (identity fields included) as its configuration.
    pub fn lookup_track(&self, label: &str) -> Result<Option<Box<dyn TrackHandler>>> {
        let document = self.document()?;

        let record = match single_position(&document, label)? {
            Some(index) => &document.tracks[index],
            None => {
                tracing::debug!("Track '{}' not found", label);
                return Ok(None);
            }
        };

        let location = self.paths.locate(label)?;
        let config = match record.to_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let context = HandlerContext {
            storage_dir: location.dir,
            base_url: location.url,
            label: record.label.clone(),
            config,
            key: record.key.clone(),
            handler_subtype: None,
        };

        self.handlers
            .construct(&record.track_type, context)
            .map(Some)
    }

    /// All track records in document order.
    pub fn list_tracks(&self) -> Result<Vec<TrackRecord>> {
        Ok(self.document()?.tracks)
    }

    /// All track labels in document order.
    pub fn track_labels(&self) -> Result<Vec<String>> {
        Ok(self
            .document()?
            .tracks
            .into_iter()
            .map(|track| track.label)
            .collect())
    }

    /// Reference sequences from `seq/refSeqs.json` (empty if absent).
    pub fn list_reference_sequences(&self) -> Result<Vec<RefSeqRecord>> {
        Ok(self.store.get(REFSEQS_PATH, Vec::new)?)
    }

    /// Construct a handler of a built-in family for `label`.
    ///
    /// `handler_subtype` picks a more specific handler type for the family
    /// and defaults to the family's canonical type. The track list is not
    /// touched; call [`Self::upsert_track`] to register the track.
    pub fn create_track(
        &self,
        kind: TrackKind,
        label: &str,
        config: Map<String, Value>,
        key: &str,
        handler_subtype: Option<&str>,
    ) -> Result<Box<dyn TrackHandler>> {
        let location = self.paths.locate(label)?;
        let type_name = handler_subtype.unwrap_or_else(|| kind.canonical_type());

        let resolved = self.handlers.resolve(type_name)?;
        if resolved.entry.kind != kind {
            return Err(TrackDbError::HandlerConstruction {
                type_name: type_name.to_string(),
                message: format!(
                    "handler {} implements {} tracks, not {} tracks",
                    resolved.name, resolved.entry.kind, kind
                ),
            });
        }

        tracing::debug!("Creating {} track '{}' as {}", kind, label, resolved.name);

        let context = HandlerContext {
            storage_dir: location.dir,
            base_url: location.url,
            label: label.to_string(),
            config,
            key: key.to_string(),
            handler_subtype: Some(type_name.to_string()),
        };

        (resolved.entry.factory)(context)
    }
}

/// Position of the only record with `label`, if any.
fn single_position(document: &TrackListDocument, label: &str) -> Result<Option<usize>> {
    let positions = document.positions_of(label);
    match positions.as_slice() {
        [] => Ok(None),
        [index] => Ok(Some(*index)),
        _ => {
            tracing::error!(
                "Track list holds {} records labelled '{}'",
                positions.len(),
                label
            );
            Err(TrackDbError::InvariantViolation {
                label: label.to_string(),
                count: positions.len(),
            })
        }
    }
}
