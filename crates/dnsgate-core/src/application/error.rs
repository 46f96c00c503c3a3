//! Application layer errors.
//!
//! These errors represent failures in orchestration (finding, reading and
//! decoding manifests), not rule violations. Rule violations are
//! `ValidationError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while gathering resources to validate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// An input path does not exist.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// A manifest exists but could not be read.
    #[error("Failed to read {path}: {reason}")]
    ManifestRead { path: PathBuf, reason: String },

    /// A manifest could not be decoded.
    #[error("Failed to parse {path} (document {document}): {reason}")]
    ManifestParse {
        path: PathBuf,
        document: usize,
        reason: String,
    },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ManifestNotFound { path } => vec![
                format!("No file or directory at: {}", path.display()),
                "Check the path and try again".into(),
            ],
            Self::ManifestRead { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read permissions".into(),
            ],
            Self::ManifestParse { document, .. } => vec![
                format!("Document {} is not valid YAML or JSON", document),
                "Documents are separated by '---' and numbered from 0".into(),
                "Check indentation and that spec.endpoints is a list".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManifestNotFound { .. } => ErrorCategory::NotFound,
            Self::ManifestRead { .. } => ErrorCategory::Internal,
            Self::ManifestParse { .. } => ErrorCategory::Validation,
        }
    }
}
