#![allow(dead_code)]

use async_trait::async_trait;
use dnslookup_application::ports::{DnsResolver, RecordStore, Resolution, ResolutionOutcome};
use dnslookup_domain::{LookupKey, ResourceRecord};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Mutex, RwLock};

pub struct MockDnsResolver {
    answers: RwLock<HashMap<LookupKey, Vec<ResourceRecord>>>,
    root: RwLock<IpAddr>,
    calls: Mutex<Vec<LookupKey>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            answers: RwLock::new(HashMap::new()),
            root: RwLock::new(IpAddr::V4(Ipv4Addr::new(198, 41, 0, 4))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_answer(self, key: LookupKey, records: Vec<ResourceRecord>) -> Self {
        self.answers.write().unwrap().insert(key, records);
        self
    }

    pub fn calls(&self) -> Vec<LookupKey> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, key: &LookupKey) -> Resolution {
        self.calls.lock().unwrap().push(key.clone());
        match self.answers.read().unwrap().get(key) {
            Some(records) => Resolution::new(key.clone(), records.clone(), ResolutionOutcome::Answered),
            None => Resolution::new(key.clone(), vec![], ResolutionOutcome::Exhausted),
        }
    }

    fn root_server(&self) -> IpAddr {
        *self.root.read().unwrap()
    }

    fn set_root_server(&self, server: IpAddr) {
        *self.root.write().unwrap() = server;
    }
}

/// Store without expiry, enough to exercise the use cases.
#[derive(Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<ResourceRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: ResourceRecord) {
        self.records.lock().unwrap().push(record);
    }

    fn get(&self, key: &LookupKey) -> Vec<ResourceRecord> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| *r.name == *key.host_name && r.record_type == key.record_type)
            .cloned()
            .collect()
    }

    fn for_each(&self, visit: &mut dyn FnMut(&LookupKey, &[ResourceRecord])) {
        let mut grouped: HashMap<LookupKey, Vec<ResourceRecord>> = HashMap::new();
        for record in self.records.lock().unwrap().iter() {
            grouped
                .entry(LookupKey::new(record.name.as_str(), record.record_type))
                .or_default()
                .push(record.clone());
        }
        for (key, records) in &grouped {
            visit(key, records);
        }
    }
}
