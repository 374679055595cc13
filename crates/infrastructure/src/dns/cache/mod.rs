pub mod record;
pub mod storage;

pub use record::CachedRecord;
pub use storage::RecordCache;
