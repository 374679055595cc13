use dnslookup_domain::{LookupKey, ResourceRecord};

/// TTL-aware record cache shared by the resolver and the `dump` command.
///
/// Expiry is lazy: a read only ever returns records that are still live, and a
/// key with no live records reads as a miss.
pub trait RecordStore: Send + Sync {
    fn insert(&self, record: ResourceRecord);

    fn get(&self, key: &LookupKey) -> Vec<ResourceRecord>;

    /// Visits every key that still has at least one live record.
    fn for_each(&self, visit: &mut dyn FnMut(&LookupKey, &[ResourceRecord]));

    fn contains(&self, key: &LookupKey) -> bool {
        !self.get(key).is_empty()
    }
}
