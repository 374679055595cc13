use dnslookup_domain::{DnsMessage, RecordType, ResourceRecord};
use std::net::IpAddr;

/// What one response means for the next query round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferralDecision {
    /// AA was set: the next round starts over at the root.
    Authoritative,
    /// Ask this glue address next.
    Glue(IpAddr),
    /// Resolve this name server from the root, then ask it.
    NameServer(String),
    /// Nothing to follow.
    None,
}

/// Picks where to go after a response for `host`.
///
/// Glue A records win over NS records; in each section a record owned by
/// `host` is preferred over the first one listed.
pub fn select_referral(message: &DnsMessage, host: &str) -> ReferralDecision {
    if message.is_authoritative() {
        return ReferralDecision::Authoritative;
    }

    let glue = preferred(&message.additional, RecordType::A, host)
        .and_then(|record| record.data.as_address());
    if let Some(address) = glue {
        return ReferralDecision::Glue(address);
    }

    let name_server = preferred(&message.authority, RecordType::NS, host)
        .and_then(|record| record.data.as_name());
    match name_server {
        Some(name) => ReferralDecision::NameServer(name.to_string()),
        None => ReferralDecision::None,
    }
}

fn preferred<'a>(
    records: &'a [ResourceRecord],
    record_type: RecordType,
    host: &str,
) -> Option<&'a ResourceRecord> {
    let mut candidates = records.iter().filter(|r| r.record_type == record_type);
    let first = candidates.next()?;
    if first.name == host {
        return Some(first);
    }
    candidates.find(|r| r.name == host).or(Some(first))
}
