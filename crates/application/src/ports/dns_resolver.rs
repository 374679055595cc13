use async_trait::async_trait;
use dnslookup_domain::{LookupKey, ResourceRecord};
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Records for the (possibly CNAME-rewritten) key were found.
    Answered,
    /// No referral left to follow; `records` holds whatever the cache had.
    Exhausted,
    /// Too many CNAME hops; `records` is always empty.
    IndirectionLimitExceeded,
    /// The per-lookup query round budget ran out; `records` is always empty.
    QueryBudgetExhausted,
}

impl ResolutionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::Exhausted => "exhausted",
            Self::IndirectionLimitExceeded => "indirection_limit",
            Self::QueryBudgetExhausted => "query_budget",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    /// The key as requested, before any CNAME rewriting.
    pub key: LookupKey,
    pub records: Vec<ResourceRecord>,
    pub outcome: ResolutionOutcome,
}

impl Resolution {
    pub fn new(key: LookupKey, records: Vec<ResourceRecord>, outcome: ResolutionOutcome) -> Self {
        Self {
            key,
            records,
            outcome,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolves `key` starting from the root server. Never fails: every error
    /// is recovered and shows up as an empty or partial result.
    async fn resolve(&self, key: &LookupKey) -> Resolution;

    fn root_server(&self) -> IpAddr;

    fn set_root_server(&self, server: IpAddr);
}
