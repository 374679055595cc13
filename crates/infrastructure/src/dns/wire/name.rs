//! Domain name encoding (RFC 1035 §3.1) and compression pointers (§4.1.4).

use bytes::BufMut;
use dnslookup_domain::DomainError;

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;

const LABEL_TYPE_MASK: u8 = 0xC0;
const LABEL_TYPE_NORMAL: u8 = 0x00;
const LABEL_TYPE_POINTER: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Reads possibly-compressed names out of a complete DNS message.
///
/// Every pointer must target an offset strictly before the segment that
/// contains it, so each jump moves backwards and decoding always terminates
/// on crafted input.
pub struct NameReader<'a> {
    message: &'a [u8],
}

impl<'a> NameReader<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        Self { message }
    }

    /// Returns the dotted name starting at `offset` and the number of bytes
    /// it occupies at that position. A pointer counts as two bytes and ends
    /// the in-place encoding.
    pub fn read_name(&self, offset: usize) -> Result<(String, usize), DomainError> {
        let mut labels: Vec<String> = Vec::new();
        let mut pos = offset;
        let mut segment_start = offset;
        let mut consumed: Option<usize> = None;
        // Terminating zero byte included.
        let mut encoded_len = 1usize;

        loop {
            let len_byte = *self
                .message
                .get(pos)
                .ok_or_else(|| DomainError::malformed(pos, "name runs past end of message"))?;

            match len_byte & LABEL_TYPE_MASK {
                LABEL_TYPE_NORMAL => {
                    let label_len = len_byte as usize;
                    if label_len == 0 {
                        consumed.get_or_insert(pos + 1 - offset);
                        break;
                    }

                    let start = pos + 1;
                    let label = self.message.get(start..start + label_len).ok_or_else(|| {
                        DomainError::malformed(pos, "label runs past end of message")
                    })?;

                    encoded_len += 1 + label_len;
                    if encoded_len > MAX_NAME_LEN {
                        return Err(DomainError::malformed(
                            offset,
                            format!("name exceeds {} bytes", MAX_NAME_LEN),
                        ));
                    }

                    labels.push(String::from_utf8_lossy(label).into_owned());
                    pos = start + label_len;
                }
                LABEL_TYPE_POINTER => {
                    let low = *self.message.get(pos + 1).ok_or_else(|| {
                        DomainError::malformed(pos, "compression pointer is truncated")
                    })?;
                    let target = (((len_byte & POINTER_OFFSET_MASK) as usize) << 8) | low as usize;

                    if target >= segment_start {
                        return Err(DomainError::malformed(
                            pos,
                            format!("compression pointer to {} does not point backwards", target),
                        ));
                    }

                    consumed.get_or_insert(pos + 2 - offset);
                    pos = target;
                    segment_start = target;
                }
                _ => {
                    return Err(DomainError::malformed(
                        pos,
                        format!("unsupported label type 0x{:02X}", len_byte),
                    ));
                }
            }
        }

        let consumed = consumed.unwrap_or(pos + 1 - offset);
        Ok((labels.join("."), consumed))
    }
}

pub fn read_name(message: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
    NameReader::new(message).read_name(offset)
}

/// Writes `name` as uncompressed labels. One trailing dot is accepted and
/// `""` or `"."` encode the root.
pub fn write_name<B: BufMut>(name: &str, out: &mut B) -> Result<(), DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        out.put_u8(0);
        return Ok(());
    }

    let mut encoded_len = 1usize;
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::LabelTooLong {
                label: label.to_string(),
                length: label.len(),
            });
        }
        encoded_len += 1 + label.len();
    }

    if encoded_len > MAX_NAME_LEN {
        return Err(DomainError::NameTooLong {
            length: encoded_len,
        });
    }

    for label in trimmed.split('.') {
        out.put_u8(label.len() as u8);
        out.put_slice(label.as_bytes());
    }
    out.put_u8(0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(name: &str) -> Vec<u8> {
        let mut buf = Vec::new();
        write_name(name, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_write_simple_name() {
        assert_eq!(encode("www.example.com"), b"\x03www\x07example\x03com\x00");
    }

    #[test]
    fn test_trailing_dot_is_ignored() {
        assert_eq!(encode("example.com."), encode("example.com"));
    }

    #[test]
    fn test_root_name() {
        assert_eq!(encode(""), vec![0]);
        assert_eq!(encode("."), vec![0]);
    }

    #[test]
    fn test_empty_middle_label_rejected() {
        let mut buf = Vec::new();
        let err = write_name("a..b", &mut buf).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDomainName(_)));
    }

    #[test]
    fn test_label_of_64_bytes_rejected() {
        let name = format!("{}.com", "a".repeat(64));
        let mut buf = Vec::new();
        let err = write_name(&name, &mut buf).unwrap_err();
        assert_eq!(
            err,
            DomainError::LabelTooLong {
                label: "a".repeat(64),
                length: 64
            }
        );
    }

    #[test]
    fn test_label_of_63_bytes_accepted() {
        let name = format!("{}.com", "a".repeat(63));
        assert_eq!(encode(&name).len(), 1 + 63 + 1 + 3 + 1);
    }

    #[test]
    fn test_name_over_255_bytes_rejected() {
        let label = "a".repeat(63);
        let name = [label.as_str(); 4].join(".");
        let mut buf = Vec::new();
        let err = write_name(&name, &mut buf).unwrap_err();
        assert_eq!(err, DomainError::NameTooLong { length: 257 });
    }

    #[test]
    fn test_read_uncompressed() {
        let buf = encode("mail.example.org");
        let (name, consumed) = read_name(&buf, 0).unwrap();
        assert_eq!(name, "mail.example.org");
        assert_eq!(consumed, buf.len());
    }

    #[test]
    fn test_read_root() {
        assert_eq!(read_name(&[0], 0).unwrap(), (String::new(), 1));
    }

    #[test]
    fn test_read_pointer_suffix() {
        let mut buf = encode("example.com");
        let second = buf.len();
        buf.extend_from_slice(b"\x03www\xC0\x00");

        let (name, consumed) = read_name(&buf, second).unwrap();
        assert_eq!(name, "www.example.com");
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_read_chained_pointers() {
        let mut buf = encode("com");
        let example = buf.len();
        buf.extend_from_slice(b"\x07example\xC0\x00");
        let www = buf.len();
        buf.extend_from_slice(&[0x03, b'w', b'w', b'w', 0xC0, example as u8]);

        let (name, consumed) = read_name(&buf, www).unwrap();
        assert_eq!(name, "www.example.com");
        assert_eq!(consumed, 6);
    }

    #[test]
    fn test_self_pointer_rejected() {
        let buf = [0xC0, 0x00];
        let err = read_name(&buf, 0).unwrap_err();
        assert!(matches!(err, DomainError::MalformedMessage(_)));
    }

    #[test]
    fn test_forward_pointer_rejected() {
        let buf = [0xC0, 0x02, 0x00];
        assert!(read_name(&buf, 0).is_err());
    }

    #[test]
    fn test_pointer_loop_rejected() {
        // offset 0: "a" then pointer to 4; offset 4: pointer back to 0
        let buf = [0x01, b'a', 0xC0, 0x04, 0xC0, 0x00];
        assert!(read_name(&buf, 4).is_err());
        assert!(read_name(&buf, 0).is_err());
    }

    #[test]
    fn test_pointer_to_earlier_root() {
        let buf = [0x00, 0x00, 0x00, 0xC0, 0x02];
        assert_eq!(read_name(&buf, 3).unwrap(), (String::new(), 2));
    }

    #[test]
    fn test_pointer_past_end_of_message_rejected() {
        let buf = [0x01, b'a', 0xC0];
        assert!(read_name(&buf, 0).is_err());
    }

    #[test]
    fn test_truncated_label_rejected() {
        let buf = [0x05, b'a', b'b'];
        assert!(read_name(&buf, 0).is_err());
    }

    #[test]
    fn test_reserved_label_types_rejected() {
        assert!(read_name(&[0x40, 0x00], 0).is_err());
        assert!(read_name(&[0x80, 0x00], 0).is_err());
    }

    #[test]
    fn test_decoded_name_over_255_rejected() {
        let mut buf = Vec::new();
        for _ in 0..5 {
            buf.push(63u8);
            buf.extend_from_slice(&[b'x'; 63]);
        }
        buf.push(0);
        assert!(read_name(&buf, 0).is_err());
    }
}
