use bytes::BufMut;
use dnslookup_domain::{DnsHeader, DomainError};

pub const HEADER_LEN: usize = 12;

// Byte 2: QR(1) OPCODE(4) AA(1) TC(1) RD(1)
const QR_BIT: u8 = 0x80;
const OPCODE_SHIFT: u8 = 3;
const OPCODE_MASK: u8 = 0x0F;
const AA_BIT: u8 = 0x04;
const TC_BIT: u8 = 0x02;
const RD_BIT: u8 = 0x01;

// Byte 3: RA(1) Z(3) RCODE(4)
const RA_BIT: u8 = 0x80;
const Z_SHIFT: u8 = 4;
const Z_MASK: u8 = 0x07;
const RCODE_MASK: u8 = 0x0F;

pub fn parse_header(buf: &[u8]) -> Result<DnsHeader, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::malformed(
            buf.len(),
            format!("header needs {} bytes, got {}", HEADER_LEN, buf.len()),
        ));
    }

    let flags_hi = buf[2];
    let flags_lo = buf[3];

    Ok(DnsHeader {
        id: u16::from_be_bytes([buf[0], buf[1]]),
        is_response: flags_hi & QR_BIT != 0,
        opcode: (flags_hi >> OPCODE_SHIFT) & OPCODE_MASK,
        authoritative: flags_hi & AA_BIT != 0,
        truncated: flags_hi & TC_BIT != 0,
        recursion_desired: flags_hi & RD_BIT != 0,
        recursion_available: flags_lo & RA_BIT != 0,
        z: (flags_lo >> Z_SHIFT) & Z_MASK,
        rcode: flags_lo & RCODE_MASK,
        question_count: u16::from_be_bytes([buf[4], buf[5]]),
        answer_count: u16::from_be_bytes([buf[6], buf[7]]),
        authority_count: u16::from_be_bytes([buf[8], buf[9]]),
        additional_count: u16::from_be_bytes([buf[10], buf[11]]),
    })
}

pub fn write_header<B: BufMut>(header: &DnsHeader, out: &mut B) {
    let mut flags_hi = (header.opcode & OPCODE_MASK) << OPCODE_SHIFT;
    if header.is_response {
        flags_hi |= QR_BIT;
    }
    if header.authoritative {
        flags_hi |= AA_BIT;
    }
    if header.truncated {
        flags_hi |= TC_BIT;
    }
    if header.recursion_desired {
        flags_hi |= RD_BIT;
    }

    let mut flags_lo = ((header.z & Z_MASK) << Z_SHIFT) | (header.rcode & RCODE_MASK);
    if header.recursion_available {
        flags_lo |= RA_BIT;
    }

    out.put_u16(header.id);
    out.put_u8(flags_hi);
    out.put_u8(flags_lo);
    out.put_u16(header.question_count);
    out.put_u16(header.answer_count);
    out.put_u16(header.authority_count);
    out.put_u16(header.additional_count);
}
