use super::RecordType;
use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

/// Placeholder shown for RDATA the resolver does not interpret.
pub const OPAQUE_PLACEHOLDER: &str = "----";

/// Interpreted RDATA of a resource record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordData {
    /// A / AAAA
    Address(IpAddr),
    /// CNAME / NS target, dot-joined with no trailing dot
    Name(String),
    /// Any other type; the raw bytes are kept only to tell records apart.
    Opaque(Vec<u8>),
}

impl RecordData {
    pub fn as_address(&self) -> Option<IpAddr> {
        match self {
            RecordData::Address(addr) => Some(*addr),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            RecordData::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Address(IpAddr::V4(v4)) => f.pad(&v4.to_string()),
            RecordData::Address(IpAddr::V6(v6)) => f.pad(&format_ipv6_groups(v6)),
            RecordData::Name(name) => f.pad(name),
            RecordData::Opaque(_) => f.pad(OPAQUE_PLACEHOLDER),
        }
    }
}

/// Renders an IPv6 address as eight colon-separated hex groups with the
/// leading zeros of each group stripped. Zero runs are not collapsed.
pub fn format_ipv6_groups(addr: &Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|group| format!("{:x}", group))
        .collect::<Vec<_>>()
        .join(":")
}

/// A decoded resource record. `ttl` is the value carried by the response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data,
        }
    }

    pub fn address(name: impl Into<String>, ttl: u32, address: IpAddr) -> Self {
        let record_type = match address {
            IpAddr::V4(_) => RecordType::A,
            IpAddr::V6(_) => RecordType::AAAA,
        };
        Self::new(name, record_type, ttl, RecordData::Address(address))
    }

    pub fn cname(name: impl Into<String>, ttl: u32, target: impl Into<String>) -> Self {
        Self::new(name, RecordType::CNAME, ttl, RecordData::Name(target.into()))
    }

    pub fn ns(name: impl Into<String>, ttl: u32, target: impl Into<String>) -> Self {
        Self::new(name, RecordType::NS, ttl, RecordData::Name(target.into()))
    }

    /// True when both records describe the same (owner, type, data) triple,
    /// regardless of TTL.
    pub fn same_data(&self, other: &ResourceRecord) -> bool {
        self.record_type == other.record_type && self.name == other.name && self.data == other.data
    }
}
