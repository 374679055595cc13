//! DNS wire format (RFC 1035 §4), the subset an iterative lookup needs.
//!
//! Encoding only ever produces single-question queries with uncompressed
//! names. Decoding accepts any response and resolves compression pointers.

pub mod decoder;
pub mod encoder;
pub mod header;
pub mod name;

pub use decoder::decode_message;
pub use encoder::encode_query;
pub use header::{parse_header, write_header, HEADER_LEN};
pub use name::{read_name, write_name, NameReader, MAX_LABEL_LEN, MAX_NAME_LEN};
