//! Cache Module
//!
//! Provides the memoizing cache: one entry per call key, refreshed lazily
//! once it outlives the TTL.

mod clock;
mod entry;
mod memo;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memo::MemoCache;
pub use stats::CacheStats;
pub use store::{CacheStore, Lookup};
