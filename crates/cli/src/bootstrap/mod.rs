use anyhow::{anyhow, Context};
use dnslookup_domain::{CliOverrides, Config};
use std::net::IpAddr;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    Config::load(path, cli_overrides).context("Failed to load configuration")
}

/// Logs go to stderr so they never interleave with shell output.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Accepts an IP literal, otherwise asks the system resolver and keeps the
/// first address.
pub async fn resolve_server_address(name: &str) -> anyhow::Result<IpAddr> {
    if let Ok(address) = name.parse::<IpAddr>() {
        return Ok(address);
    }

    let mut addresses = tokio::net::lookup_host((name, 0))
        .await
        .with_context(|| format!("Invalid root server ({})", name))?;

    let address = addresses
        .next()
        .map(|socket_addr| socket_addr.ip())
        .ok_or_else(|| anyhow!("Invalid root server ({}): no addresses", name))?;

    debug!(name, address = %address, "Resolved server name");
    Ok(address)
}
