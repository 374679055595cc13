use super::header::{parse_header, HEADER_LEN};
use super::name::NameReader;
use dnslookup_domain::{
    DnsMessage, DnsQuestion, DomainError, RecordData, RecordType, ResourceRecord,
    RCODE_NAME_ERROR,
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Decodes a complete response datagram.
///
/// RCODE 3 short-circuits to [`DomainError::NxDomain`] before any section is
/// read. Every other structural problem is a `MalformedMessage`. Decoding has
/// no side effects: the resolver's query round caches every decoded record,
/// from all three sections, right after a successful decode.
pub fn decode_message(buf: &[u8]) -> Result<DnsMessage, DomainError> {
    let header = parse_header(buf)?;
    if header.rcode == RCODE_NAME_ERROR {
        return Err(DomainError::NxDomain);
    }

    let mut cursor = MessageCursor::new(buf, HEADER_LEN);

    let questions = (0..header.question_count)
        .map(|_| cursor.read_question())
        .collect::<Result<Vec<_>, _>>()?;
    let answers = cursor.read_records(header.answer_count)?;
    let authority = cursor.read_records(header.authority_count)?;
    let additional = cursor.read_records(header.additional_count)?;

    Ok(DnsMessage {
        header,
        questions,
        answers,
        authority,
        additional,
    })
}

struct MessageCursor<'a> {
    message: &'a [u8],
    names: NameReader<'a>,
    pos: usize,
}

impl<'a> MessageCursor<'a> {
    fn new(message: &'a [u8], pos: usize) -> Self {
        Self {
            message,
            names: NameReader::new(message),
            pos,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let start = self.pos;
        let bytes = self
            .message
            .get(start..start + len)
            .ok_or_else(|| DomainError::malformed(start, format!("expected {} more bytes", len)))?;
        self.pos += len;
        Ok(bytes)
    }

    fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_name(&mut self) -> Result<String, DomainError> {
        let (name, consumed) = self.names.read_name(self.pos)?;
        self.pos += consumed;
        Ok(name)
    }

    fn read_question(&mut self) -> Result<DnsQuestion, DomainError> {
        let qname = self.read_name()?;
        let qtype = RecordType::from_u16(self.read_u16()?);
        let qclass = self.read_u16()?;
        Ok(DnsQuestion {
            qname,
            qtype,
            qclass,
        })
    }

    fn read_records(&mut self, count: u16) -> Result<Vec<ResourceRecord>, DomainError> {
        (0..count).map(|_| self.read_record()).collect()
    }

    fn read_record(&mut self) -> Result<ResourceRecord, DomainError> {
        let name = self.read_name()?;
        let record_type = RecordType::from_u16(self.read_u16()?);
        // CLASS is read and ignored.
        self.read_u16()?;
        let ttl = self.read_u32()?;
        let rdlength = self.read_u16()? as usize;
        let rdata_start = self.pos;
        let rdata = self.take(rdlength)?;

        let data = match record_type {
            RecordType::A => {
                let octets: [u8; 4] = rdata.try_into().map_err(|_| {
                    DomainError::malformed(
                        rdata_start,
                        format!("A record RDATA is {} bytes, expected 4", rdlength),
                    )
                })?;
                RecordData::Address(IpAddr::V4(Ipv4Addr::from(octets)))
            }
            RecordType::AAAA => {
                let octets: [u8; 16] = rdata.try_into().map_err(|_| {
                    DomainError::malformed(
                        rdata_start,
                        format!("AAAA record RDATA is {} bytes, expected 16", rdlength),
                    )
                })?;
                RecordData::Address(IpAddr::V6(Ipv6Addr::from(octets)))
            }
            RecordType::CNAME | RecordType::NS => {
                let (target, consumed) = self.names.read_name(rdata_start)?;
                if consumed > rdlength {
                    return Err(DomainError::malformed(
                        rdata_start,
                        format!(
                            "{} target occupies {} bytes but RDLENGTH is {}",
                            record_type.as_str(),
                            consumed,
                            rdlength
                        ),
                    ));
                }
                RecordData::Name(target)
            }
            _ => RecordData::Opaque(rdata.to_vec()),
        };

        Ok(ResourceRecord::new(name, record_type, ttl, data))
    }
}
