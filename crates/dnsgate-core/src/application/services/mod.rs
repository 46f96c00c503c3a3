//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate these manifests".

pub mod validation_service;

pub use validation_service::{
    DEFAULT_EXTENSIONS, ResourceReport, ValidationOptions, ValidationReport, ValidationService,
};
