use super::{RecordType, ResourceRecord};

/// RCODE 3: the queried name does not exist.
pub const RCODE_NAME_ERROR: u8 = 3;

/// QCLASS / CLASS value for the Internet class.
pub const CLASS_IN: u16 = 1;

/// Fixed 12-byte message header, field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DnsHeader {
    pub id: u16,
    pub is_response: bool,
    pub opcode: u8,
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub z: u8,
    pub rcode: u8,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl DnsHeader {
    /// Header of an outgoing query: every flag clear, one question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            question_count: 1,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuestion {
    pub qname: String,
    pub qtype: RecordType,
    pub qclass: u16,
}

impl DnsQuestion {
    pub fn new(qname: impl Into<String>, qtype: RecordType) -> Self {
        Self {
            qname: qname.into(),
            qtype,
            qclass: CLASS_IN,
        }
    }
}

/// One decoded query/response exchange. Built per exchange, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnsMessage {
    pub header: DnsHeader,
    pub questions: Vec<DnsQuestion>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn is_authoritative(&self) -> bool {
        self.header.authoritative
    }

    pub fn question(&self) -> Option<&DnsQuestion> {
        self.questions.first()
    }

    /// Every record of the answer, authority and additional sections, in that order.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}
