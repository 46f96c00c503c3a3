//! Validation Service - main application orchestrator.
//!
//! This service coordinates the validation workflow:
//! 1. Resolve input paths into manifest files
//! 2. Read and decode every `DNSEndpoint` document
//! 3. Validate each resource and collect a report
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ManifestParser},
    },
    domain::{DnsEndpoint, DnsEndpointValidator as validator, ValidationError},
    error::DnsGateResult,
};

/// Default file extensions picked up when a directory is given.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Knobs for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Report every violation instead of stopping at the first one.
    pub all_errors: bool,
    /// Extensions (without dot) of files to read from directories.
    pub extensions: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            all_errors: false,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
        }
    }
}

/// Outcome for one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceReport {
    pub source: PathBuf,
    /// Zero-based document index within `source`.
    pub document: usize,
    /// `namespace/name` of the resource.
    pub name: String,
    /// Empty when the resource was accepted.
    pub errors: Vec<ValidationError>,
}

impl ResourceReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Outcome for a whole run, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub resources: Vec<ResourceReport>,
}

impl ValidationReport {
    /// `true` when every resource was accepted.
    pub fn is_valid(&self) -> bool {
        self.resources.iter().all(ResourceReport::is_valid)
    }

    pub fn accepted(&self) -> impl Iterator<Item = &ResourceReport> {
        self.resources.iter().filter(|r| r.is_valid())
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ResourceReport> {
        self.resources.iter().filter(|r| !r.is_valid())
    }
}

/// Main validation service.
pub struct ValidationService {
    filesystem: Box<dyn Filesystem>,
    parser: Box<dyn ManifestParser>,
    options: ValidationOptions,
}

impl ValidationService {
    /// Create a new validation service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use dnsgate_core::application::{ValidationOptions, ValidationService};
    ///
    /// let service = ValidationService::new(
    ///     filesystem, // impl Filesystem
    ///     parser,     // impl ManifestParser
    ///     ValidationOptions::default(),
    /// );
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        parser: Box<dyn ManifestParser>,
        options: ValidationOptions,
    ) -> Self {
        Self {
            filesystem,
            parser,
            options,
        }
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validate a single in-memory resource.
    ///
    /// Returns at most one error unless `all_errors` is set.
    pub fn validate_resource(&self, resource: &DnsEndpoint) -> Vec<ValidationError> {
        if self.options.all_errors {
            validator::validate_all(resource)
        } else {
            validator::validate(resource).err().into_iter().collect()
        }
    }

    /// Validate every `DNSEndpoint` found under `paths`.
    ///
    /// Rejected resources do not make this fail; they are recorded in the
    /// report. Missing, unreadable or undecodable manifests abort the run.
    #[instrument(skip_all, fields(inputs = paths.len()))]
    pub fn validate_paths(&self, paths: &[PathBuf]) -> DnsGateResult<ValidationReport> {
        let files = self.resolve_files(paths)?;
        info!(files = files.len(), "Manifests resolved");

        let mut report = ValidationReport::default();
        for file in &files {
            report.resources.extend(self.validate_file(file)?);
        }

        info!(
            accepted = report.accepted().count(),
            rejected = report.rejected().count(),
            "Validation finished"
        );
        Ok(report)
    }

    /// Validate every `DNSEndpoint` in one manifest file.
    #[instrument(skip_all, fields(file = %path.display()))]
    pub fn validate_file(&self, path: &Path) -> DnsGateResult<Vec<ResourceReport>> {
        let text = self.filesystem.read_to_string(path)?;
        let documents = self.parser.parse(path, &text)?;
        if documents.is_empty() {
            debug!("No DNSEndpoint documents");
        }

        Ok(documents
            .into_iter()
            .map(|doc| {
                let name = doc.resource.display_name();
                let errors = self.validate_resource(&doc.resource);
                match errors.first() {
                    Some(first) => warn!(resource = %name, error = %first, "Resource rejected"),
                    None => debug!(resource = %name, "Resource accepted"),
                }
                ResourceReport {
                    source: path.to_path_buf(),
                    document: doc.index,
                    name,
                    errors,
                }
            })
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Expand directories; keep explicit files whatever their extension.
    fn resolve_files(&self, paths: &[PathBuf]) -> DnsGateResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in paths {
            if !self.filesystem.exists(path) {
                return Err(ApplicationError::ManifestNotFound { path: path.clone() }.into());
            }
            if self.filesystem.is_dir(path) {
                let found = self.filesystem.list_files(path, &self.options.extensions)?;
                if found.is_empty() {
                    warn!(dir = %path.display(), "No manifests in directory");
                }
                files.extend(found);
            } else {
                files.push(path.clone());
            }
        }
        Ok(files)
    }
}
