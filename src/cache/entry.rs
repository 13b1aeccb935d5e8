//! Cache Entry Module
//!
//! Defines the memoized value slot and the staleness rule applied to it.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// The last computed result for a call key.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored result
    pub value: V,
    /// When `value` was computed
    pub refreshed_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry for a value computed at `now`.
    pub fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            refreshed_at: now,
        }
    }

    // == Age ==
    /// Time elapsed since the last refresh.
    ///
    /// Saturates to zero if `now` is earlier than the refresh instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.refreshed_at)
    }

    // == Is Stale ==
    /// Checks whether the entry must be recomputed.
    ///
    /// Boundary condition: the entry is stale only once its age is strictly
    /// greater than `ttl`. An age of exactly `ttl` is still fresh.
    pub fn is_stale(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
