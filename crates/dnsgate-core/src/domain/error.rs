// ============================================================================
// domain/error.rs - VALIDATION AND DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::{RecordType, join_record_types};

/// Prefix carried by every validation error message.
pub const VALIDATION_CONTEXT: &str = "error validating DNSEndpoint";

/// A violated `DNSEndpoint` constraint.
///
/// Callers branch on the variant; the display form is meant for users and
/// always starts with [`VALIDATION_CONTEXT`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `spec.endpoints` is empty.
    #[error("{ctx}: endpoints not provided", ctx = VALIDATION_CONTEXT)]
    EmptySpec,

    /// `recordType` is not one of the supported values.
    #[error(
        "{ctx}: {field}: Unsupported value: \"{value}\": supported values: {list}",
        ctx = VALIDATION_CONTEXT,
        list = join_record_types(.supported)
    )]
    UnsupportedRecordType {
        field: String,
        value: String,
        supported: &'static [RecordType],
    },

    /// A target is not an IPv4 or IPv6 address literal.
    #[error(
        "{ctx}: {field}: Invalid value: \"{target}\": must be a valid IP address, (e.g. 10.9.8.7 or 2001:db8::ffff)",
        ctx = VALIDATION_CONTEXT
    )]
    InvalidTarget { field: String, target: String },
}

impl ValidationError {
    /// Path of the offending field, e.g. `spec.endpoints[0].recordType`.
    pub fn field(&self) -> &str {
        match self {
            Self::EmptySpec => "spec.endpoints",
            Self::UnsupportedRecordType { field, .. } | Self::InvalidTarget { field, .. } => field,
        }
    }

    /// Stable machine-readable name of the variant.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptySpec => "EmptySpec",
            Self::UnsupportedRecordType { .. } => "UnsupportedRecordType",
            Self::InvalidTarget { .. } => "InvalidTarget",
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySpec => vec![
                "Add at least one entry under spec.endpoints".into(),
                "Each entry needs a dnsName, recordType and targets".into(),
            ],
            Self::UnsupportedRecordType { value, supported, .. } => vec![
                format!("'{}' is not a supported record type", value),
                format!("Supported values: {}", join_record_types(supported)),
                "Record types are case-sensitive".into(),
            ],
            Self::InvalidTarget { target, .. } => vec![
                format!("'{}' is not an IP address", target),
                "Targets must be IPv4 (10.9.8.7) or IPv6 (2001:db8::ffff) literals".into(),
            ],
        }
    }
}

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A resource failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A string could not be parsed as a [`RecordType`].
    #[error("unsupported record type '{0}' (supported values: {list})", list = RecordType::supported_values())]
    UnknownRecordType(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => e.suggestions(),
            Self::UnknownRecordType(value) => vec![
                format!("'{}' is not a supported record type", value),
                format!("Supported values: {}", RecordType::supported_values()),
            ],
        }
    }
}
