//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use dnsgate_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{DnsGateError, DnsGateResult},
};

use super::has_extension;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> DnsGateResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path, extensions: &[String]) -> DnsGateResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).follow_links(true) {
            let entry = entry.map_err(|e| ApplicationError::ManifestRead {
                path: e.path().unwrap_or(dir).to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                trace!(file = %entry.path().display(), "Manifest found");
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error) -> DnsGateError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::ManifestNotFound {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::ManifestRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    }
    .into()
}
