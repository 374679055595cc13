use async_trait::async_trait;
use dnslookup_domain::DomainError;
use std::net::IpAddr;

/// Called with the 1-based attempt number right before each transmission.
pub type AttemptObserver<'a> = &'a (dyn Fn(u32) + Send + Sync);

/// Datagram exchange with a single name server.
///
/// Implementations return only a reply whose ID echoes the query's, skipping
/// anything stale left over from earlier exchanges.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(
        &self,
        query: &[u8],
        server: IpAddr,
        on_attempt: AttemptObserver<'_>,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
