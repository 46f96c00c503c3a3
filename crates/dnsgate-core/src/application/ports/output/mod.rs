//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `dnsgate-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::DnsEndpoint;
use crate::error::DnsGateResult;

/// Port for filesystem access.
///
/// Implemented by:
/// - `dnsgate_adapters::filesystem::LocalFilesystem` (production)
/// - `dnsgate_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> DnsGateResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Files below `dir`, recursively, whose extension is in `extensions`.
    ///
    /// Extensions are compared case-insensitively and without the leading
    /// dot. The result is sorted so that reports are stable.
    fn list_files(&self, dir: &Path, extensions: &[String]) -> DnsGateResult<Vec<PathBuf>>;
}

/// A `DNSEndpoint` decoded from one document of a manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    /// Zero-based position of the document within its file.
    pub index: usize,
    pub resource: DnsEndpoint,
}

/// Port for decoding manifest text.
///
/// Implemented by:
/// - `dnsgate_adapters::manifest::YamlManifestParser` (YAML and JSON)
pub trait ManifestParser: Send + Sync {
    /// Decode every `DNSEndpoint` in `text`.
    ///
    /// Documents of other kinds are skipped. `source` is only used for
    /// error messages.
    fn parse(&self, source: &Path, text: &str) -> DnsGateResult<Vec<ManifestDocument>>;
}
