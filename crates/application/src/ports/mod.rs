mod dns_resolver;
mod dns_transport;
mod record_store;
mod trace_sink;

pub use dns_resolver::{DnsResolver, Resolution, ResolutionOutcome};
pub use dns_transport::{AttemptObserver, DnsTransport};
pub use record_store::RecordStore;
pub use trace_sink::{NoopTraceSink, TraceEvent, TraceSink};

// Re-export for convenience
pub use dnslookup_domain::LookupKey;
