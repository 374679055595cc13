use crate::ports::{DnsResolver, Resolution};
use dnslookup_domain::{DomainError, LookupKey, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info};

pub struct LookupUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(
        &self,
        host_name: &str,
        record_type: RecordType,
    ) -> Result<Resolution, DomainError> {
        if host_name.is_empty() || host_name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidDomainName(host_name.to_string()));
        }

        let key = LookupKey::new(host_name, record_type);
        debug!(host = %key.host_name, record_type = %key.record_type, "Starting lookup");

        let resolution = self.resolver.resolve(&key).await;

        debug!(
            host = %key.host_name,
            record_type = %key.record_type,
            records = resolution.records.len(),
            outcome = resolution.outcome.as_str(),
            "Lookup finished"
        );

        Ok(resolution)
    }

    pub fn root_server(&self) -> IpAddr {
        self.resolver.root_server()
    }

    pub fn change_root_server(&self, server: IpAddr) {
        info!(root = %server, "Root server changed");
        self.resolver.set_root_server(server);
    }
}
