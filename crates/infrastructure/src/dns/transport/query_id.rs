use std::sync::atomic::{AtomicU16, Ordering};

/// Hands out 16-bit query IDs from a wrapping counter with a random start.
#[derive(Debug)]
pub struct QueryIdAllocator {
    next: AtomicU16,
}

impl QueryIdAllocator {
    pub fn new() -> Self {
        Self::starting_at(fastrand::u16(..))
    }

    pub fn starting_at(first: u16) -> Self {
        Self {
            next: AtomicU16::new(first),
        }
    }

    pub fn next_id(&self) -> u16 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for QueryIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
