use dnslookup_application::ports::{DnsResolver, RecordStore, TraceEvent};
use dnslookup_application::use_cases::{DumpCacheUseCase, LookupUseCase};
use dnslookup_domain::Config;
use dnslookup_infrastructure::dns::{
    IterativeResolver, RecordCache, TraceEventEmitter, UdpTransport,
};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

pub struct LookupServices {
    pub lookup: Arc<LookupUseCase>,
    pub dump_cache: Arc<DumpCacheUseCase>,
    pub trace: TraceEventEmitter,
    pub trace_events: mpsc::UnboundedReceiver<TraceEvent>,
}

impl LookupServices {
    pub async fn new(config: &Config, root_server: IpAddr) -> anyhow::Result<Self> {
        let transport = Arc::new(
            UdpTransport::bind(config.resolver.port, config.resolver.query_timeout()).await?,
        );
        let store: Arc<dyn RecordStore> = Arc::new(RecordCache::new());
        let (trace, trace_events) = TraceEventEmitter::new_enabled();

        let resolver: Arc<dyn DnsResolver> = Arc::new(
            IterativeResolver::new(transport, Arc::clone(&store), root_server, &config.resolver)
                .with_trace_sink(Arc::new(trace.clone())),
        );

        info!(port = config.resolver.port, "Lookup services ready");

        Ok(Self::from_parts(resolver, store, trace, trace_events))
    }

    pub fn from_parts(
        resolver: Arc<dyn DnsResolver>,
        store: Arc<dyn RecordStore>,
        trace: TraceEventEmitter,
        trace_events: mpsc::UnboundedReceiver<TraceEvent>,
    ) -> Self {
        Self {
            lookup: Arc::new(LookupUseCase::new(resolver)),
            dump_cache: Arc::new(DumpCacheUseCase::new(store)),
            trace,
            trace_events,
        }
    }
}
