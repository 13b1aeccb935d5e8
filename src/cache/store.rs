//! Cache Store Module
//!
//! The unsynchronized map from call key to memoized entry, and the lookup
//! policy that classifies an entry as fresh, stale, or missing.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Lookup Outcome ==
/// Result of checking a key against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<V> {
    /// Entry exists and is within its TTL
    Fresh(V),
    /// Entry exists but is older than the TTL; carries its age
    Stale(Duration),
    /// No entry for the key
    Missing,
}

// == Cache Store ==
/// Key-to-entry storage with lookup statistics.
///
/// Holds at most one entry per key. Entries are only ever inserted or
/// overwritten, never removed.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Memoized results by call key
    entries: HashMap<String, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
        }
    }

    // == Lookup ==
    /// Classifies the entry for `key` at instant `now`.
    ///
    /// Does not update statistics; see [`CacheStore::record_lookup`].
    pub fn lookup(&self, key: &str, now: Instant, ttl: Duration) -> Lookup<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_stale(now, ttl) => Lookup::Stale(entry.age(now)),
            Some(entry) => Lookup::Fresh(entry.value.clone()),
            None => Lookup::Missing,
        }
    }

    // == Store ==
    /// Records a freshly computed value for `key`, replacing any previous one.
    pub fn store(&mut self, key: &str, value: V, now: Instant) {
        match self.entries.get_mut(key) {
            Some(entry) => *entry = CacheEntry::new(value, now),
            None => {
                self.entries
                    .insert(key.to_string(), CacheEntry::new(value, now));
            }
        }
        self.stats.set_total_entries(self.entries.len());
    }

    // == Peek ==
    /// Returns the value for `key` if it is fresh.
    pub fn peek(&self, key: &str, now: Instant, ttl: Duration) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_stale(now, ttl))
            .map(|entry| &entry.value)
    }

    // == Age ==
    /// Time since `key` was last refreshed, if it has an entry.
    pub fn age(&self, key: &str, now: Instant) -> Option<Duration> {
        self.entries.get(key).map(|entry| entry.age(now))
    }

    /// Returns true if `key` has an entry, fresh or stale.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Statistics ==
    /// Counts a lookup outcome.
    pub fn record_lookup(&mut self, lookup: &Lookup<V>) {
        match lookup {
            Lookup::Fresh(_) => self.stats.record_hit(),
            Lookup::Stale(_) => self.stats.record_refresh(),
            Lookup::Missing => self.stats.record_miss(),
        }
    }

    /// Counts a failed invocation of the wrapped operation.
    pub fn record_failure(&mut self) {
        self.stats.record_failure();
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
