use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_DNS_PORT: u16 = 53;
pub const DEFAULT_QUERY_TIMEOUT_MS: u64 = 5_000;
pub const MAX_INDIRECTION_LEVEL: u32 = 10;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Address (or host name, resolved once at startup) of the first server asked.
    #[serde(default = "default_root_server")]
    pub root_server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Wait per transmission attempt. Each exchange makes at most two attempts.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_max_indirection_level")]
    pub max_indirection_level: u32,

    /// Upper bound on query rounds for one top-level lookup, nested
    /// name server lookups included.
    #[serde(default = "default_max_query_rounds")]
    pub max_query_rounds: u32,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_server.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Root server cannot be empty".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }
        if self.max_query_rounds == 0 {
            return Err(ConfigError::Validation(
                "max_query_rounds cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_indirection_level: default_max_indirection_level(),
            max_query_rounds: default_max_query_rounds(),
        }
    }
}

fn default_root_server() -> String {
    // d.root-servers.net
    "199.7.91.13".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_query_timeout_ms() -> u64 {
    DEFAULT_QUERY_TIMEOUT_MS
}

fn default_max_indirection_level() -> u32 {
    MAX_INDIRECTION_LEVEL
}

fn default_max_query_rounds() -> u32 {
    64
}
