pub mod record;
pub mod record_type;

pub use record::{format_ipv6_groups, RecordData, ResourceRecord, OPAQUE_PLACEHOLDER};
pub use record_type::RecordType;
