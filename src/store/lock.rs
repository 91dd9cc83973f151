//! Exclusive advisory locks on document paths.

use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use super::StoreError;

/// Holds an exclusive lock on a `<document>.lock` file until dropped.
#[derive(Debug)]
pub struct LockGuard {
    file: File,
    path: PathBuf,
}

impl LockGuard {
    /// Lock file path used for a document.
    pub fn lock_path(document: &Path) -> PathBuf {
        let mut name = document
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".lock");
        document.with_file_name(name)
    }

    /// Block until the exclusive lock for `document` is held.
    pub fn acquire(document: &Path) -> Result<Self, StoreError> {
        let path = Self::lock_path(document);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| StoreError::Lock {
                path: path.clone(),
                source,
            })?;

        file.lock_exclusive().map_err(|source| StoreError::Lock {
            path: path.clone(),
            source,
        })?;

        tracing::trace!("Acquired lock {:?}", path);
        Ok(Self { file, path })
    }

    /// Path of the lock file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Err(e) = FileExt::unlock(&self.file) {
            tracing::warn!("Failed to release lock {:?}: {}", self.path, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lock_path_appends_suffix() {
        let path = LockGuard::lock_path(Path::new("/data/trackList.json"));
        assert_eq!(path, PathBuf::from("/data/trackList.json.lock"));
    }

    #[test]
    fn acquire_creates_lock_file_and_parents() {
        let temp = TempDir::new().unwrap();
        let document = temp.path().join("seq").join("refSeqs.json");

        let guard = LockGuard::acquire(&document).unwrap();

        assert!(guard.path().exists());
        assert!(!document.exists());
    }

    #[test]
    fn lock_is_reacquirable_after_drop() {
        let temp = TempDir::new().unwrap();
        let document = temp.path().join("trackList.json");

        drop(LockGuard::acquire(&document).unwrap());
        let again = LockGuard::acquire(&document);

        assert!(again.is_ok());
    }
}
