//! Application layer for dnsgate.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DEFAULT_EXTENSIONS, ResourceReport, ValidationOptions, ValidationReport, ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestDocument, ManifestParser};

pub use error::ApplicationError;
