use bytes::BufMut;
use dnslookup_domain::{DnsHeader, DnsMessage, RecordData, RecordType, ResourceRecord};
use dnslookup_infrastructure::dns::wire::{write_header, write_name};

/// Builds response datagrams with uncompressed names.
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    id: u16,
    authoritative: bool,
    rcode: u8,
    question: Option<(String, RecordType)>,
    answers: Vec<ResourceRecord>,
    authority: Vec<ResourceRecord>,
    additional: Vec<ResourceRecord>,
}

impl ResponseBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            authoritative: false,
            rcode: 0,
            question: None,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Starts a response echoing the ID and question of `query`.
    pub fn reply_to(query: &DnsMessage) -> Self {
        let mut builder = Self::new(query.id());
        if let Some(question) = query.question() {
            builder.question = Some((question.qname.clone(), question.qtype));
        }
        builder
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn authoritative(mut self) -> Self {
        self.authoritative = true;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.rcode = rcode;
        self
    }

    pub fn question(mut self, name: &str, record_type: RecordType) -> Self {
        self.question = Some((name.to_string(), record_type));
        self
    }

    pub fn answer(mut self, record: ResourceRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.additional.push(record);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let header = DnsHeader {
            id: self.id,
            is_response: true,
            authoritative: self.authoritative,
            rcode: self.rcode,
            question_count: u16::from(self.question.is_some()),
            answer_count: self.answers.len() as u16,
            authority_count: self.authority.len() as u16,
            additional_count: self.additional.len() as u16,
            ..DnsHeader::default()
        };

        let mut buf = Vec::with_capacity(512);
        write_header(&header, &mut buf);

        if let Some((name, record_type)) = &self.question {
            write_name(name, &mut buf).unwrap();
            buf.put_u16(record_type.to_u16());
            buf.put_u16(1);
        }

        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            write_record(record, &mut buf);
        }
        buf
    }
}

fn write_record(record: &ResourceRecord, buf: &mut Vec<u8>) {
    write_name(&record.name, buf).unwrap();
    buf.put_u16(record.record_type.to_u16());
    buf.put_u16(1);
    buf.put_u32(record.ttl);

    let mut rdata = Vec::new();
    match &record.data {
        RecordData::Address(std::net::IpAddr::V4(v4)) => rdata.extend_from_slice(&v4.octets()),
        RecordData::Address(std::net::IpAddr::V6(v6)) => rdata.extend_from_slice(&v6.octets()),
        RecordData::Name(target) => write_name(target, &mut rdata).unwrap(),
        RecordData::Opaque(bytes) => rdata.extend_from_slice(bytes),
    }
    buf.put_u16(rdata.len() as u16);
    buf.extend_from_slice(&rdata);
}
