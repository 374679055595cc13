pub mod query_id;
pub mod udp;

pub use query_id::QueryIdAllocator;
pub use udp::UdpTransport;
