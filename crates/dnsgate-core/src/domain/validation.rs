use crate::domain::{
    entities::{DnsEndpoint, DnsEndpointSpec, Endpoint},
    error::ValidationError,
    value_objects::{RecordType, Targets, is_ip_literal},
};

/// Admission-time validation of `DNSEndpoint` resources.
///
/// Checks run in a fixed order: non-empty spec, then per endpoint the
/// record type, the targets and the DNS name. The validator holds no
/// state and never mutates its input.
pub struct DnsEndpointValidator;

impl DnsEndpointValidator {
    /// Validate a resource, stopping at the first violated constraint.
    pub fn validate(endpoint: &DnsEndpoint) -> Result<(), ValidationError> {
        verify_spec(&endpoint.spec)?;
        for (index, e) in endpoint.spec.endpoints.iter().enumerate() {
            verify_endpoint(index, e)?;
        }
        Ok(())
    }

    /// Validate a resource and collect every violation.
    ///
    /// An empty spec yields only [`ValidationError::EmptySpec`]. Within an
    /// endpoint, every failing target is reported.
    pub fn validate_all(endpoint: &DnsEndpoint) -> Vec<ValidationError> {
        if let Err(e) = verify_spec(&endpoint.spec) {
            return vec![e];
        }

        let mut errors = Vec::new();
        for (index, e) in endpoint.spec.endpoints.iter().enumerate() {
            if let Err(err) = verify_record_type(index, &e.record_type) {
                errors.push(err);
            }
            errors.extend(invalid_targets(index, &e.targets));
        }
        errors
    }
}

fn verify_spec(spec: &DnsEndpointSpec) -> Result<(), ValidationError> {
    if spec.endpoints.is_empty() {
        return Err(ValidationError::EmptySpec);
    }
    Ok(())
}

fn verify_endpoint(index: usize, endpoint: &Endpoint) -> Result<(), ValidationError> {
    verify_record_type(index, &endpoint.record_type)?;
    verify_targets(index, &endpoint.targets)?;
    verify_dns_name(&endpoint.dns_name)?;
    Ok(())
}

fn verify_record_type(index: usize, record_type: &str) -> Result<(), ValidationError> {
    match record_type.parse::<RecordType>() {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::UnsupportedRecordType {
            field: format!("spec.endpoints[{index}].recordType"),
            value: record_type.to_owned(),
            supported: &RecordType::ALL,
        }),
    }
}

fn verify_targets(index: usize, targets: &Targets) -> Result<(), ValidationError> {
    match invalid_targets(index, targets).next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn invalid_targets(index: usize, targets: &Targets) -> impl Iterator<Item = ValidationError> + '_ {
    targets
        .iter()
        .enumerate()
        .filter(|(_, target)| !is_ip_literal(target))
        .map(move |(i, target)| ValidationError::InvalidTarget {
            field: format!("spec.endpoints[{index}].targets[{i}]"),
            target: target.to_owned(),
        })
}

// Placeholder: DNS names are not checked yet.
fn verify_dns_name(_dns_name: &str) -> Result<(), ValidationError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DnsEndpointSpec;

    fn resource(endpoints: Vec<Endpoint>) -> DnsEndpoint {
        DnsEndpoint::new("test", DnsEndpointSpec::new(endpoints))
    }

    #[test]
    fn dns_name_check_accepts_anything() {
        for name in ["", "not a name", "-bad-.example.", "a..b", "*.example.com"] {
            assert!(verify_dns_name(name).is_ok());
        }
    }

    #[test]
    fn record_type_checked_before_targets() {
        let ep = resource(vec![Endpoint::new("x.example.com", "MX", ["nope"])]);
        assert!(matches!(
            DnsEndpointValidator::validate(&ep),
            Err(ValidationError::UnsupportedRecordType { .. })
        ));
    }

    #[test]
    fn first_failing_endpoint_wins() {
        let ep = resource(vec![
            Endpoint::new("a.example.com", "A", ["10.0.0.1"]),
            Endpoint::new("b.example.com", "A", ["10.0.0.2", "bad"]),
            Endpoint::new("c.example.com", "MX", ["10.0.0.3"]),
        ]);
        assert_eq!(
            DnsEndpointValidator::validate(&ep),
            Err(ValidationError::InvalidTarget {
                field: "spec.endpoints[1].targets[1]".into(),
                target: "bad".into(),
            })
        );
    }

    #[test]
    fn validate_all_collects_everything() {
        let ep = resource(vec![
            Endpoint::new("a.example.com", "MX", ["bad-1", "10.0.0.1", "bad-2"]),
            Endpoint::new("b.example.com", "A", ["10.0.0.2"]),
        ]);
        let errors = DnsEndpointValidator::validate_all(&ep);
        let fields: Vec<_> = errors.iter().map(ValidationError::field).collect();
        assert_eq!(
            fields,
            [
                "spec.endpoints[0].recordType",
                "spec.endpoints[0].targets[0]",
                "spec.endpoints[0].targets[2]",
            ]
        );
    }

    #[test]
    fn validate_all_on_empty_spec() {
        assert_eq!(
            DnsEndpointValidator::validate_all(&resource(vec![])),
            vec![ValidationError::EmptySpec]
        );
    }

    #[test]
    fn validate_agrees_with_first_of_validate_all() {
        let cases = [
            vec![],
            vec![Endpoint::new("a", "A", ["10.0.0.1"])],
            vec![Endpoint::new("a", "TXT", ["txt-value"])],
            vec![Endpoint::new("a", "SOA", ["10.0.0.1"])],
            vec![
                Endpoint::new("a", "A", ["10.0.0.1"]),
                Endpoint::new("b", "PTR", ["2001:db8::1", "x"]),
            ],
        ];
        for endpoints in cases {
            let ep = resource(endpoints);
            let first = DnsEndpointValidator::validate_all(&ep).into_iter().next();
            assert_eq!(DnsEndpointValidator::validate(&ep).err(), first);
        }
    }
}
