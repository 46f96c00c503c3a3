//! YAML / JSON manifest parser.
//!
//! A manifest is a stream of `---`-separated YAML documents (JSON files are
//! read as a single document). Each document is one of:
//!
//! - empty (only comments) → skipped
//! - a `DNSEndpoint` → decoded
//! - a list (`kind: List` or `kind: DNSEndpointList`) → each item handled
//!   as above
//! - any other resource → skipped
//!
//! Anything that is not a mapping, or a `DNSEndpoint` that does not decode,
//! is an `ApplicationError::ManifestParse`.

use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;
use tracing::debug;

use dnsgate_core::{
    application::{ApplicationError, ManifestDocument, ports::ManifestParser},
    domain::DnsEndpoint,
    error::{DnsGateError, DnsGateResult},
};

/// Parser for YAML streams and JSON documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlManifestParser;

impl YamlManifestParser {
    pub fn new() -> Self {
        Self
    }

    fn documents(source: &Path, text: &str) -> DnsGateResult<Vec<Value>> {
        let is_json = source
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            let json: serde_json::Value =
                serde_json::from_str(text).map_err(|e| parse_error(source, 0, e))?;
            let value = serde_yaml::to_value(json).map_err(|e| parse_error(source, 0, e))?;
            return Ok(vec![value]);
        }

        serde_yaml::Deserializer::from_str(text)
            .enumerate()
            .map(|(index, document)| {
                Value::deserialize(document).map_err(|e| parse_error(source, index, e))
            })
            .collect()
    }

    fn collect(
        source: &Path,
        index: usize,
        value: Value,
        out: &mut Vec<ManifestDocument>,
    ) -> DnsGateResult<()> {
        if value.is_null() {
            return Ok(());
        }
        if !value.is_mapping() {
            return Err(parse_error(source, index, "document is not a mapping"));
        }

        let api_version = value.get("apiVersion").and_then(Value::as_str).unwrap_or("");
        let kind = value.get("kind").and_then(Value::as_str).unwrap_or("");

        if kind.ends_with("List") {
            if let Some(items) = value.get("items").and_then(Value::as_sequence) {
                for item in items {
                    Self::collect(source, index, item.clone(), out)?;
                }
                return Ok(());
            }
        }

        if !DnsEndpoint::is_type_of(api_version, kind) {
            debug!(document = index, api_version, kind, "Skipping non-DNSEndpoint document");
            return Ok(());
        }

        let resource: DnsEndpoint =
            serde_yaml::from_value(value).map_err(|e| parse_error(source, index, e))?;
        out.push(ManifestDocument { index, resource });
        Ok(())
    }
}

impl ManifestParser for YamlManifestParser {
    fn parse(&self, source: &Path, text: &str) -> DnsGateResult<Vec<ManifestDocument>> {
        let mut out = Vec::new();
        for (index, value) in Self::documents(source, text)?.into_iter().enumerate() {
            Self::collect(source, index, value, &mut out)?;
        }
        debug!(file = %source.display(), resources = out.len(), "Manifest decoded");
        Ok(out)
    }
}

fn parse_error(source: &Path, document: usize, reason: impl ToString) -> DnsGateError {
    ApplicationError::ManifestParse {
        path: source.to_path_buf(),
        document,
        reason: reason.to_string(),
    }
    .into()
}
