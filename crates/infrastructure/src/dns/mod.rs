pub mod cache;
pub mod events;
pub mod resolver;
pub mod transport;
pub mod wire;

pub use cache::{CachedRecord, RecordCache};
pub use events::TraceEventEmitter;
pub use resolver::{IterativeResolver, Referral, ResolutionContext};
pub use transport::{QueryIdAllocator, UdpTransport};
