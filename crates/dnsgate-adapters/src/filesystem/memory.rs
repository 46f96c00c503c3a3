//! In-memory filesystem adapter for testing.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use dnsgate_core::{
    application::{ApplicationError, ports::Filesystem},
    error::DnsGateResult,
};

use super::has_extension;

/// In-memory filesystem for testing.
///
/// Directories are implied by the files stored below them. A panic while
/// the lock is held does not lose the map: later calls keep working on it.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Self::insert`].
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.write().insert(path.into(), content.into());
    }

    /// Clear all contents.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> DnsGateResult<String> {
        self.read().get(path).cloned().ok_or_else(|| {
            ApplicationError::ManifestNotFound {
                path: path.to_path_buf(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.read().keys().any(|p| p.starts_with(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read().keys().any(|p| p != path && p.starts_with(path))
    }

    fn list_files(&self, dir: &Path, extensions: &[String]) -> DnsGateResult<Vec<PathBuf>> {
        // BTreeMap keys are already sorted.
        Ok(self
            .read()
            .keys()
            .filter(|p| *p != dir && p.starts_with(dir) && has_extension(p, extensions))
            .cloned()
            .collect())
    }
}
