use super::CachedRecord;
use dashmap::DashMap;
use dnslookup_application::ports::RecordStore;
use dnslookup_domain::{LookupKey, ResourceRecord};
use rustc_hash::FxBuildHasher;
use std::time::Instant;
use tracing::debug;

/// In-memory record cache keyed by (owner name, type).
///
/// Records carrying the same data as an existing entry replace it and restart
/// its TTL; records with different data accumulate under the key. Expired
/// records are purged when a read touches their key.
pub struct RecordCache {
    entries: DashMap<LookupKey, Vec<CachedRecord>, FxBuildHasher>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn insert_at(&self, record: ResourceRecord, now: Instant) {
        let key = LookupKey::new(record.name.as_str(), record.record_type);

        debug!(
            name = %record.name,
            record_type = %record.record_type,
            ttl = record.ttl,
            "Caching record"
        );

        let mut bucket = self.entries.entry(key).or_default();
        match bucket.iter_mut().find(|cached| cached.record.same_data(&record)) {
            Some(existing) => *existing = CachedRecord::new(record, now),
            None => bucket.push(CachedRecord::new(record, now)),
        }
    }

    pub fn get_at(&self, key: &LookupKey, now: Instant) -> Vec<ResourceRecord> {
        let live = {
            let Some(mut bucket) = self.entries.get_mut(key) else {
                return Vec::new();
            };

            let before = bucket.len();
            bucket.retain(|cached| cached.is_live_at(now));
            let purged = before - bucket.len();
            if purged > 0 {
                debug!(host = %key.host_name, purged, "Purged expired records");
            }

            bucket
                .iter()
                .map(|cached| cached.record.clone())
                .collect::<Vec<_>>()
        };

        if live.is_empty() {
            self.entries.remove_if(key, |_, bucket| bucket.is_empty());
        }
        live
    }

    /// Snapshot of every key with live records at `now`. The callback runs
    /// after all shard locks are released.
    pub fn for_each_at(
        &self,
        now: Instant,
        visit: &mut dyn FnMut(&LookupKey, &[ResourceRecord]),
    ) {
        let snapshot: Vec<(LookupKey, Vec<ResourceRecord>)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let live: Vec<ResourceRecord> = entry
                    .value()
                    .iter()
                    .filter(|cached| cached.is_live_at(now))
                    .map(|cached| cached.record.clone())
                    .collect();
                (!live.is_empty()).then(|| (entry.key().clone(), live))
            })
            .collect();

        for (key, records) in &snapshot {
            visit(key, records);
        }
    }

    /// Number of keys currently held, expired ones included until a read purges them.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for RecordCache {
    fn insert(&self, record: ResourceRecord) {
        self.insert_at(record, Instant::now());
    }

    fn get(&self, key: &LookupKey) -> Vec<ResourceRecord> {
        self.get_at(key, Instant::now())
    }

    fn for_each(&self, visit: &mut dyn FnMut(&LookupKey, &[ResourceRecord])) {
        self.for_each_at(Instant::now(), visit);
    }
}
