//! JSON file document store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{LockGuard, StoreError};

/// Document store backed by JSON files under a root directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Root directory that relative document paths resolve against.
    root: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `root`. The directory need not exist yet.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a `/`-separated relative path to a filesystem path.
    pub fn path_for(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Check whether a document has been written.
    pub fn exists(&self, relative: &str) -> bool {
        self.path_for(relative).is_file()
    }

    /// Read a document, returning `default()` when it does not exist.
    ///
    /// Does not take the document lock: writers replace the file with a
    /// rename, so a reader sees either the previous or the next version.
    pub fn get<T, D>(&self, relative: &str, default: D) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
        D: FnOnce() -> T,
    {
        let path = self.path_for(relative);
        match read_document(&path)? {
            Some(document) => Ok(document),
            None => {
                tracing::debug!("Document {:?} absent, using default", path);
                Ok(default())
            }
        }
    }

    /// Atomically read, transform and write back a document.
    ///
    /// The exclusive lock is held from the read until the replacement file
    /// has been renamed into place. If `transform` fails nothing is written
    /// and its error is returned unchanged. Returns the document as written.
    pub fn modify<T, D, F, E>(&self, relative: &str, default: D, transform: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        D: FnOnce() -> T,
        F: FnOnce(T) -> Result<T, E>,
        E: From<StoreError>,
    {
        let path = self.path_for(relative);
        let _guard = LockGuard::acquire(&path)?;

        let current = read_document(&path)?.unwrap_or_else(default);
        let updated = transform(current)?;
        write_document(&path, &updated)?;

        tracing::debug!("Wrote document {:?}", path);
        Ok(updated)
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Write to a sibling temp file, then rename over the target.
fn write_document<T: Serialize>(path: &Path, document: &T) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(document).map_err(|source| {
        StoreError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(format!(".{}.tmp", std::process::id()));
    let temp_path = path.with_file_name(temp_name);

    let mut file = fs::File::create(&temp_path).map_err(io_err)?;
    file.write_all(json.as_bytes()).map_err(io_err)?;
    file.write_all(b"\n").map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    drop(file);

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_err(source));
    }

    Ok(())
}
