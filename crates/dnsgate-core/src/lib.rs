//! dnsgate Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for dnsgate, the
//! admission-time validator for `DNSEndpoint` custom resources
//! (`externaldns.nginx.org/v1`).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dnsgate-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │    (Driven: Filesystem, ManifestParser) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dnsgate-adapters (Infrastructure)    │
//! │ (LocalFilesystem, YamlManifestParser)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (DnsEndpoint, DnsEndpointValidator)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use dnsgate_core::domain::{
//!     DnsEndpoint, DnsEndpointSpec, DnsEndpointValidator, Endpoint, ValidationError,
//! };
//!
//! let resource = DnsEndpoint::new(
//!     "web",
//!     DnsEndpointSpec::new(vec![Endpoint::new("web.example.com", "A", ["10.0.0.1"])]),
//! );
//! assert!(DnsEndpointValidator::validate(&resource).is_ok());
//!
//! let empty = DnsEndpoint::new("empty", DnsEndpointSpec::default());
//! assert_eq!(
//!     DnsEndpointValidator::validate(&empty),
//!     Err(ValidationError::EmptySpec)
//! );
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ResourceReport, ValidationOptions, ValidationReport, ValidationService,
        ports::{Filesystem, ManifestDocument, ManifestParser},
    };
    pub use crate::domain::{
        DnsEndpoint, DnsEndpointSpec, DnsEndpointValidator, Endpoint, RecordType, Targets,
        ValidationError,
    };
    pub use crate::error::{DnsGateError, DnsGateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
