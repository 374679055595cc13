use dnslookup_domain::ResourceRecord;
use std::time::{Duration, Instant};

/// A cached record together with the instant it was stored.
#[derive(Debug, Clone)]
pub struct CachedRecord {
    pub record: ResourceRecord,
    pub inserted_at: Instant,
}

impl CachedRecord {
    pub fn new(record: ResourceRecord, inserted_at: Instant) -> Self {
        Self {
            record,
            inserted_at,
        }
    }

    pub fn expires_at(&self) -> Instant {
        self.inserted_at + Duration::from_secs(u64::from(self.record.ttl))
    }

    /// Live while strictly before `inserted_at + ttl`; a zero TTL is never live.
    pub fn is_live_at(&self, now: Instant) -> bool {
        now < self.expires_at()
    }
}
