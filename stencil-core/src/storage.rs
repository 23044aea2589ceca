//! Storage port that generated files and aggregator files go through.
//!
//! Implemented by:
//! - [`LocalStorage`] (production, `std::fs`)
//! - [`MemoryStorage`] (tests and dry runs)

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{Error, Result};

/// Synchronous text storage.
///
/// Failures are reported as [`Error::Io`] and are never retried.
pub trait Storage {
    /// Read the full content of a text file.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a text file, creating parent directories as needed.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        (**self).write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Storage backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory storage.
///
/// Cloning shares the underlying files, so a clone handed to a generator can
/// be inspected afterwards. Every update is a single map insert, so a lock
/// poisoned by a panicking holder still guards a consistent map and is
/// recovered.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemoryStorage {
    /// Create an empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory storage pre-populated with files.
    pub fn with_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<PathBuf>,
        C: Into<String>,
    {
        let storage = Self::new();
        for (path, content) in files {
            storage.insert(path, content);
        }
        storage
    }

    fn read_files(&self) -> RwLockReadGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_files(&self) -> RwLockWriteGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.write_files().insert(path.into(), content.into());
    }

    /// Get a file's content, if present.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read_files().get(path.as_ref()).cloned()
    }

    /// All stored paths in sorted order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.read_files().keys().cloned().collect()
    }

    /// Number of stored files.
    pub fn len(&self) -> usize {
        self.read_files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.get(path).ok_or_else(|| {
            Error::io(
                path,
                io::Error::new(io::ErrorKind::NotFound, "no such file in memory storage"),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        self.insert(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_files().contains_key(path)
    }
}
