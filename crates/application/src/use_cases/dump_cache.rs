use crate::ports::RecordStore;
use dnslookup_domain::{LookupKey, ResourceRecord};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CacheDumpEntry {
    pub key: LookupKey,
    pub records: Vec<ResourceRecord>,
}

pub struct DumpCacheUseCase {
    store: Arc<dyn RecordStore>,
}

impl DumpCacheUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Live cache contents, ordered by host name then record type.
    pub fn execute(&self) -> Vec<CacheDumpEntry> {
        let mut entries = Vec::new();
        self.store.for_each(&mut |key, records| {
            entries.push(CacheDumpEntry {
                key: key.clone(),
                records: records.to_vec(),
            });
        });
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }
}
