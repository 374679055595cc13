#![allow(dead_code)]
use dnslookup_domain::{RecordData, RecordType, ResourceRecord};
use std::net::IpAddr;
use std::str::FromStr;

pub struct ResourceRecordBuilder {
    name: String,
    record_type: RecordType,
    ttl: u32,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            ttl: 300,
            data: RecordData::Address(IpAddr::from_str("192.0.2.1").unwrap()),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn address(mut self, addr: &str) -> Self {
        let ip = IpAddr::from_str(addr).unwrap();
        self.record_type = if ip.is_ipv4() {
            RecordType::A
        } else {
            RecordType::AAAA
        };
        self.data = RecordData::Address(ip);
        self
    }

    pub fn cname(mut self, target: &str) -> Self {
        self.record_type = RecordType::CNAME;
        self.data = RecordData::Name(target.to_string());
        self
    }

    pub fn ns(mut self, target: &str) -> Self {
        self.record_type = RecordType::NS;
        self.data = RecordData::Name(target.to_string());
        self
    }

    pub fn opaque(mut self, code: u16, bytes: &[u8]) -> Self {
        self.record_type = RecordType::from_u16(code);
        self.data = RecordData::Opaque(bytes.to_vec());
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.record_type, self.ttl, self.data)
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
