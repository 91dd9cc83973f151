//! Handler type resolution.
//!
//! Type names are dotted (`ImageTrack.Wiggle.Frobnicated`) in track records
//! and `::`-separated once normalized. Resolution walks from the most
//! specific name to its shortest ancestor and stops at the first name with
//! a registered handler:
//!
//! ```
//! use trackdb::handlers::fallback_chain;
//!
//! assert_eq!(
//!     fallback_chain("ImageTrack.Wiggle.Frobnicated"),
//!     vec!["ImageTrack::Wiggle::Frobnicated", "ImageTrack::Wiggle", "ImageTrack"]
//! );
//! ```

use std::collections::HashMap;

use crate::error::{Result, TrackDbError};

use super::{FeatureTrack, HandlerContext, HandlerFactory, ImageTrack, TrackHandler, TrackKind};

/// Namespace separator used in normalized type names.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Normalize a dotted type name.
///
/// Dots become `::` and every character outside `[A-Za-z0-9_:]` is dropped.
pub fn normalize_type(type_name: &str) -> String {
    type_name
        .replace('.', NAMESPACE_SEPARATOR)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ':')
        .collect()
}

/// Candidate type names from most to least specific.
///
/// Empty namespace segments are skipped, so `A..B` yields `A::B`, `A`.
pub fn fallback_chain(type_name: &str) -> Vec<String> {
    let normalized = normalize_type(type_name);
    let segments: Vec<&str> = normalized
        .split(NAMESPACE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect();

    (1..=segments.len())
        .rev()
        .map(|len| segments[..len].join(NAMESPACE_SEPARATOR))
        .collect()
}

/// A registered handler type.
#[derive(Debug, Clone, Copy)]
pub struct HandlerEntry {
    /// Family the handler implements.
    pub kind: TrackKind,
    /// Constructor.
    pub factory: HandlerFactory,
}

/// Result of resolving a type name.
#[derive(Debug, Clone)]
pub struct ResolvedType {
    /// Normalized name of the matching registration.
    pub name: String,
    /// The matching registration.
    pub entry: HandlerEntry,
}

/// Mapping from normalized type names to handler constructors.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerEntry>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `FeatureTrack` and `ImageTrack` handlers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(FeatureTrack::TYPE_NAME, TrackKind::Feature, FeatureTrack::factory);
        registry.register(ImageTrack::TYPE_NAME, TrackKind::Image, ImageTrack::factory);
        registry
    }

    /// Register a handler under `type_name` (dotted or `::` form).
    ///
    /// Replaces any previous registration with the same normalized name.
    pub fn register(&mut self, type_name: &str, kind: TrackKind, factory: HandlerFactory) {
        let name = normalize_type(type_name);
        tracing::trace!("Registering handler {} ({})", name, kind);
        self.handlers.insert(name, HandlerEntry { kind, factory });
    }

    /// Register `alias` as another name for whatever `target` resolves to.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> Result<()> {
        let resolved = self.resolve(target)?;
        let name = normalize_type(alias);
        tracing::debug!("Aliasing handler {} -> {}", name, resolved.name);
        self.handlers.insert(name, resolved.entry);
        Ok(())
    }

    /// Check whether a handler is registered under exactly this name.
    pub fn contains(&self, type_name: &str) -> bool {
        self.handlers.contains_key(&normalize_type(type_name))
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Find the most specific registered handler for `type_name`.
    pub fn resolve(&self, type_name: &str) -> Result<ResolvedType> {
        let candidates = fallback_chain(type_name);

        for candidate in &candidates {
            if let Some(entry) = self.handlers.get(candidate) {
                tracing::debug!("Type '{}' resolved to {}", type_name, candidate);
                return Ok(ResolvedType {
                    name: candidate.clone(),
                    entry: *entry,
                });
            }
            tracing::trace!("No handler registered for {}", candidate);
        }

        Err(TrackDbError::UnresolvableType {
            type_name: type_name.to_string(),
            candidates,
        })
    }

    /// Resolve `type_name` and construct its handler.
    pub fn construct(
        &self,
        type_name: &str,
        context: HandlerContext,
    ) -> Result<Box<dyn TrackHandler>> {
        let resolved = self.resolve(type_name)?;
        (resolved.entry.factory)(context)
    }
}
