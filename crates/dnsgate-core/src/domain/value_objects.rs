//! Domain value objects: RecordType, Targets, ProviderSpecificProperty.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! `RecordType` is the closed set of DNS record types a `DNSEndpoint` may
//! publish. The resource model keeps the raw `recordType` string (it is
//! user input); the validator parses it into a `RecordType`.
//!
//! # Adding New Record Types
//!
//! 1. Add the enum variant here
//! 2. Add it to `RecordType::ALL` (display order matters for error messages)
//! 3. Add the `as_str` arm and the `FromStr` arm here

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

// ── RecordType ───────────────────────────────────────────────────────────────

/// A DNS record type supported by the external-dns provider contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordType {
    A,
    #[serde(rename = "CNAME")]
    Cname,
    #[serde(rename = "TXT")]
    Txt,
    #[serde(rename = "SRV")]
    Srv,
    #[serde(rename = "NS")]
    Ns,
    #[serde(rename = "PTR")]
    Ptr,
}

impl RecordType {
    /// Every supported record type, in the order shown to users.
    pub const ALL: [RecordType; 6] = [
        Self::A,
        Self::Cname,
        Self::Txt,
        Self::Srv,
        Self::Ns,
        Self::Ptr,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Cname => "CNAME",
            Self::Txt => "TXT",
            Self::Srv => "SRV",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
        }
    }

    /// Comma-separated list of the supported values, e.g. for error details.
    pub fn supported_values() -> String {
        join_record_types(&Self::ALL)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: `"a"` is not a record type, `"A"` is.
impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "CNAME" => Ok(Self::Cname),
            "TXT" => Ok(Self::Txt),
            "SRV" => Ok(Self::Srv),
            "NS" => Ok(Self::Ns),
            "PTR" => Ok(Self::Ptr),
            other => Err(DomainError::UnknownRecordType(other.to_owned())),
        }
    }
}

pub(crate) fn join_record_types(types: &[RecordType]) -> String {
    types
        .iter()
        .map(RecordType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Targets ──────────────────────────────────────────────────────────────────

/// The values a record points to.
///
/// Serialised as a plain JSON/YAML sequence of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Targets(Vec<String>);

impl Targets {
    pub fn new(targets: Vec<String>) -> Self {
        Self(targets)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Targets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Targets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(";"))
    }
}

/// Whether `s` is an IPv4 or IPv6 address literal.
///
/// Dotted-decimal IPv4 octets may carry leading zeros (`010.0.0.1` is
/// 10.0.0.1). Zone identifiers (`fe80::1%eth0`) and CIDR suffixes are
/// rejected.
pub fn is_ip_literal(s: &str) -> bool {
    is_dotted_quad(s) || s.parse::<IpAddr>().is_ok()
}

/// Four decimal octets, each at most 255, leading zeros allowed.
fn is_dotted_quad(s: &str) -> bool {
    let octets: Vec<&str> = s.split('.').collect();
    octets.len() == 4
        && octets.iter().all(|octet| {
            !octet.is_empty()
                && octet.bytes().all(|b| b.is_ascii_digit())
                && octet.parse::<u8>().is_ok()
        })
}

// ── ProviderSpecificProperty ─────────────────────────────────────────────────

/// Opaque key/value pair forwarded to the DNS provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSpecificProperty {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl ProviderSpecificProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
