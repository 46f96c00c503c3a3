//! The `DNSEndpoint` custom resource (`externaldns.nginx.org/v1`).
//!
//! Field names on the wire follow the Kubernetes JSON convention, so these
//! types decode straight from a manifest or an admission request body.
//! Only `recordType` and `targets` are constrained (see
//! [`crate::domain::DnsEndpointValidator`]); everything else is carried
//! through untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ProviderSpecificProperty, Targets};

/// API group of the resource.
pub const GROUP: &str = "externaldns.nginx.org";
/// API version of the resource.
pub const VERSION: &str = "v1";
/// Kind of the resource.
pub const KIND: &str = "DNSEndpoint";

/// Time-to-live of a record, in seconds.
pub type Ttl = i64;

/// Labels attached to a single endpoint.
pub type Labels = BTreeMap<String, String>;

/// A `DNSEndpoint` resource: the records one object asks to publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpoint {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: DnsEndpointSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DnsEndpointStatus>,
}

fn default_api_version() -> String {
    format!("{GROUP}/{VERSION}")
}

fn default_kind() -> String {
    KIND.to_owned()
}

impl DnsEndpoint {
    /// Create a resource with the given name and spec.
    pub fn new(name: impl Into<String>, spec: DnsEndpointSpec) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..ObjectMeta::default()
            },
            spec,
            status: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = Some(namespace.into());
        self
    }

    /// `namespace/name`, or just `name` for cluster-scoped input.
    ///
    /// Unnamed resources render as `<unnamed>`.
    pub fn display_name(&self) -> String {
        let name = self.metadata.name.as_deref().unwrap_or("<unnamed>");
        match self.metadata.namespace.as_deref() {
            Some(ns) => format!("{ns}/{name}"),
            None => name.to_owned(),
        }
    }

    /// Whether an `apiVersion`/`kind` pair designates this resource type.
    ///
    /// Any version of the group is accepted; only the kind and group are
    /// checked.
    pub fn is_type_of(api_version: &str, kind: &str) -> bool {
        let group = api_version.split_once('/').map(|(g, _)| g);
        kind == KIND && group == Some(GROUP)
    }
}

/// The subset of Kubernetes object metadata the tool reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<i64>,
}

/// Desired state: an ordered list of endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DnsEndpointSpec {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl DnsEndpointSpec {
    pub fn new(endpoints: Vec<Endpoint>) -> Self {
        Self { endpoints }
    }
}

/// A single DNS record: name, type, targets and provider extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, rename = "dnsName", skip_serializing_if = "String::is_empty")]
    pub dns_name: String,
    #[serde(default, skip_serializing_if = "Targets::is_empty")]
    pub targets: Targets,
    /// Raw record type as written by the user; validated, never trusted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    #[serde(default, rename = "recordTTL", skip_serializing_if = "Option::is_none")]
    pub record_ttl: Option<Ttl>,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provider_specific: Vec<ProviderSpecificProperty>,
}

impl Endpoint {
    pub fn new<I, S>(dns_name: impl Into<String>, record_type: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            dns_name: dns_name.into(),
            targets: targets.into_iter().collect(),
            record_type: record_type.into(),
            ..Self::default()
        }
    }

    pub fn with_ttl(mut self, ttl: Ttl) -> Self {
        self.record_ttl = Some(ttl);
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_provider_specific(mut self, property: ProviderSpecificProperty) -> Self {
        self.provider_specific.push(property);
        self
    }
}

/// Observed state written back by the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsEndpointStatus {
    #[serde(default)]
    pub observed_generation: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let json = r#"{
            "apiVersion": "externaldns.nginx.org/v1",
            "kind": "DNSEndpoint",
            "metadata": { "name": "web", "namespace": "prod", "generation": 3 },
            "spec": {
                "endpoints": [{
                    "dnsName": "web.example.com",
                    "targets": ["10.0.0.1"],
                    "recordType": "A",
                    "recordTTL": 300,
                    "labels": { "owner": "team-a" },
                    "providerSpecific": [{ "name": "aws/weight", "value": "10" }]
                }]
            },
            "status": { "observedGeneration": 2 }
        }"#;

        let ep: DnsEndpoint = serde_json::from_str(json).unwrap();
        assert_eq!(ep.display_name(), "prod/web");
        assert_eq!(ep.metadata.generation, Some(3));
        assert_eq!(ep.status.as_ref().map(|s| s.observed_generation), Some(2));

        let e = &ep.spec.endpoints[0];
        assert_eq!(e.dns_name, "web.example.com");
        assert_eq!(e.record_type, "A");
        assert_eq!(e.record_ttl, Some(300));
        assert_eq!(e.labels.get("owner").map(String::as_str), Some("team-a"));
        assert_eq!(e.provider_specific[0], ProviderSpecificProperty::new("aws/weight", "10"));
    }

    #[test]
    fn missing_spec_decodes_as_empty() {
        let ep: DnsEndpoint =
            serde_json::from_str(r#"{"metadata": {"name": "x"}}"#).unwrap();
        assert!(ep.spec.endpoints.is_empty());
        assert_eq!(ep.kind, KIND);
    }

    #[test]
    fn is_type_of_checks_group_and_kind() {
        assert!(DnsEndpoint::is_type_of("externaldns.nginx.org/v1", "DNSEndpoint"));
        assert!(DnsEndpoint::is_type_of("externaldns.nginx.org/v1alpha1", "DNSEndpoint"));
        assert!(!DnsEndpoint::is_type_of("externaldns.k8s.io/v1alpha1", "DNSEndpoint"));
        assert!(!DnsEndpoint::is_type_of("externaldns.nginx.org/v1", "Service"));
        assert!(!DnsEndpoint::is_type_of("v1", "DNSEndpoint"));
    }

    #[test]
    fn unnamed_resource_display() {
        let ep = DnsEndpoint {
            metadata: ObjectMeta::default(),
            ..DnsEndpoint::new("ignored", DnsEndpointSpec::default())
        };
        assert_eq!(ep.display_name(), "<unnamed>");
    }
}
