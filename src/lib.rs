//! Memo Cache - A method-level memoizing cache
//!
//! Memoizes the results of zero-argument operations by call identity and
//! serves them until they outlive a fixed TTL, recomputing lazily on the
//! next call.
//!
//! ```
//! use std::time::Duration;
//!
//! use memo_cache::{memoize, CacheError, CallKey, MemoCache};
//!
//! let cache = MemoCache::new(Duration::from_secs(180));
//! let key = CallKey::new("notes::repository::find_all")?;
//!
//! let rows = memoize(&cache, &key, || Ok::<_, CacheError>(vec!["first note"]))?;
//! let again = memoize(&cache, &key, || Ok::<_, CacheError>(vec![]))?;
//! assert_eq!(rows, again);
//! # Ok::<(), CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod memoize;

pub use cache::{CacheStats, Clock, ManualClock, MemoCache, SystemClock};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use memoize::{memoize, memoize_async, CallKey, Memoized};
