pub mod dns_endpoint;

pub use crate::domain::DomainError;
pub use dns_endpoint::{
    DnsEndpoint, DnsEndpointSpec, DnsEndpointStatus, Endpoint, GROUP, KIND, Labels, ObjectMeta,
    Ttl, VERSION,
};
