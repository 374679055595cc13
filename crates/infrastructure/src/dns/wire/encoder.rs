use super::header::{write_header, HEADER_LEN};
use super::name::write_name;
use bytes::BufMut;
use dnslookup_domain::{DnsHeader, DomainError, RecordType, CLASS_IN};

/// Builds a single-question query with every header flag clear.
pub fn encode_query(id: u16, name: &str, record_type: RecordType) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + name.len() + 6);
    write_header(&DnsHeader::query(id), &mut buf);
    write_name(name, &mut buf)?;
    buf.put_u16(record_type.to_u16());
    buf.put_u16(CLASS_IN);
    Ok(buf)
}
