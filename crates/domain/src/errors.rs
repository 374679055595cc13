use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Maximum number of indirection levels ({limit}) reached")]
    IndirectionLimitExceeded { limit: u32 },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Label '{label}' is {length} bytes, the limit is 63")]
    LabelTooLong { label: String, length: usize },

    #[error("Encoded name is {length} bytes, the limit is 255")]
    NameTooLong { length: usize },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors that end a single query round without aborting the lookup.
    pub fn is_round_failure(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedMessage(_)
                | DomainError::NxDomain
                | DomainError::QueryTimeout { .. }
                | DomainError::IoError(_)
        )
    }

    pub fn malformed(offset: usize, reason: impl std::fmt::Display) -> Self {
        DomainError::MalformedMessage(format!("{} at offset {}", reason, offset))
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}
