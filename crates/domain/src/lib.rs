//! Domain layer of the iterative DNS lookup tool: record model, message model,
//! errors and configuration.
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod lookup_key;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_message::{DnsHeader, DnsMessage, DnsQuestion, CLASS_IN, RCODE_NAME_ERROR};
pub use dns_record::{format_ipv6_groups, RecordData, RecordType, ResourceRecord};
pub use errors::DomainError;
pub use lookup_key::LookupKey;
