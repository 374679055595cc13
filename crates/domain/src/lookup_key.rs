use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// Unit of resolution and cache key: a host name and the record type wanted.
///
/// Host names compare exactly as received (case-sensitive, no normalisation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupKey {
    pub host_name: Arc<str>,
    pub record_type: RecordType,
}

impl LookupKey {
    pub fn new(host_name: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            host_name: host_name.into(),
            record_type,
        }
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    /// Same host name, different record type.
    pub fn with_type(&self, record_type: RecordType) -> Self {
        Self {
            host_name: Arc::clone(&self.host_name),
            record_type,
        }
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.host_name, self.record_type)
    }
}
