// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dnsgate.
//!
//! This module contains the `DNSEndpoint` resource model and the rules a
//! resource must satisfy before it is admitted. All I/O (reading manifests,
//! decoding YAML) is handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable inputs**: Validation borrows resources, never mutates them
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    DnsEndpoint, DnsEndpointSpec, DnsEndpointStatus, Endpoint, Labels, ObjectMeta, Ttl,
};

pub use error::{DomainError, VALIDATION_CONTEXT, ValidationError};

pub use value_objects::{ProviderSpecificProperty, RecordType, Targets, is_ip_literal};

pub use validation::DnsEndpointValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(record_type: &str, targets: &[&str]) -> DnsEndpoint {
        DnsEndpoint::new(
            "web",
            DnsEndpointSpec::new(vec![Endpoint::new(
                "web.example.com",
                record_type,
                targets.iter().copied(),
            )]),
        )
    }

    // ========================================================================
    // Validator contract
    // ========================================================================

    #[test]
    fn a_record_with_ipv4_target_is_valid() {
        assert_eq!(
            DnsEndpointValidator::validate(&resource("A", &["10.0.0.1"])),
            Ok(())
        );
    }

    #[test]
    fn mx_record_is_unsupported() {
        let err = DnsEndpointValidator::validate(&resource("MX", &["10.0.0.1"])).unwrap_err();
        match err {
            ValidationError::UnsupportedRecordType {
                field,
                value,
                supported,
            } => {
                assert_eq!(field, "spec.endpoints[0].recordType");
                assert_eq!(value, "MX");
                assert_eq!(supported, &RecordType::ALL);
            }
            other => panic!("expected UnsupportedRecordType, got {other:?}"),
        }
    }

    #[test]
    fn hostname_target_is_invalid() {
        let err = DnsEndpointValidator::validate(&resource("A", &["not-an-ip"])).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidTarget {
                field: "spec.endpoints[0].targets[0]".into(),
                target: "not-an-ip".into(),
            }
        );
    }

    #[test]
    fn empty_spec_is_rejected() {
        let ep = DnsEndpoint::new("empty", DnsEndpointSpec::default());
        assert_eq!(
            DnsEndpointValidator::validate(&ep),
            Err(ValidationError::EmptySpec)
        );
    }

    #[test]
    fn every_supported_type_passes_with_valid_targets() {
        for rt in RecordType::ALL {
            let ep = resource(rt.as_str(), &["192.0.2.10", "2001:db8::ffff"]);
            assert!(DnsEndpointValidator::validate(&ep).is_ok(), "{rt} rejected");
        }
    }

    #[test]
    fn unsupported_types_are_rejected() {
        for rt in ["AAAA", "MX", "CAA", "SOA", "a", "cname", ""] {
            assert!(
                matches!(
                    DnsEndpointValidator::validate(&resource(rt, &["10.0.0.1"])),
                    Err(ValidationError::UnsupportedRecordType { .. })
                ),
                "{rt:?} accepted"
            );
        }
    }

    #[test]
    fn non_ip_targets_are_rejected() {
        for target in ["example.com", "10.0.0", "10.0.0.1:53", "fe80::1%eth0", "10.0.0.0/8"] {
            assert!(
                matches!(
                    DnsEndpointValidator::validate(&resource("A", &[target])),
                    Err(ValidationError::InvalidTarget { .. })
                ),
                "{target:?} accepted"
            );
        }
    }

    #[test]
    fn leading_zero_octets_are_accepted() {
        let endpoint = resource("A", &["010.0.0.1", "1.2.3.04"]);
        assert!(DnsEndpointValidator::validate(&endpoint).is_ok());
        assert!(DnsEndpointValidator::validate_all(&endpoint).is_empty());
    }

    #[test]
    fn endpoint_without_targets_is_valid() {
        assert!(DnsEndpointValidator::validate(&resource("CNAME", &[])).is_ok());
    }

    #[test]
    fn other_fields_are_not_validated() {
        let endpoint = Endpoint::new("", "A", ["10.0.0.1"])
            .with_ttl(-1)
            .with_label("anything", "")
            .with_provider_specific(ProviderSpecificProperty::new("", ""));
        let ep = DnsEndpoint::new("web", DnsEndpointSpec::new(vec![endpoint]));
        assert!(DnsEndpointValidator::validate(&ep).is_ok());
    }

    #[test]
    fn validation_is_deterministic_and_leaves_input_untouched() {
        let ep = resource("MX", &["bad"]);
        let before = ep.clone();
        let first = DnsEndpointValidator::validate(&ep);
        let second = DnsEndpointValidator::validate(&ep);
        assert_eq!(first, second);
        assert_eq!(ep, before);
    }
}
