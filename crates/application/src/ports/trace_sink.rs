use dnslookup_domain::{RecordType, ResourceRecord};
use std::net::IpAddr;
use std::sync::Arc;

/// Observable points of a resolution, rendered by the shell when tracing is on.
#[derive(Debug, Clone)]
pub enum TraceEvent {
    QuerySent {
        id: u16,
        host: Arc<str>,
        record_type: RecordType,
        server: IpAddr,
        attempt: u32,
    },
    ResponseReceived {
        id: u16,
        authoritative: bool,
        answers: Vec<ResourceRecord>,
        authority: Vec<ResourceRecord>,
        additional: Vec<ResourceRecord>,
    },
    IndirectionLimitReached {
        host: Arc<str>,
        limit: u32,
    },
}

pub trait TraceSink: Send + Sync {
    fn emit(&self, event: TraceEvent);

    /// Lets producers skip building events nobody will look at.
    fn is_enabled(&self) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn emit(&self, _event: TraceEvent) {}

    fn is_enabled(&self) -> bool {
        false
    }
}
