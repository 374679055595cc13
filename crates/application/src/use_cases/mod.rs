pub mod dump_cache;
pub mod lookup;

pub use dump_cache::{CacheDumpEntry, DumpCacheUseCase};
pub use lookup::LookupUseCase;
