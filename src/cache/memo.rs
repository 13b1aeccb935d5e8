//! Memoizing Cache Module
//!
//! Thread-safe memoization of zero-argument operations keyed by call identity,
//! with lazy TTL refresh.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore, Clock, Lookup, SystemClock};
use crate::config::CacheConfig;
use crate::error::{validate_key, CacheError};

/// Per-key lock serializing async recomputation when single-flight is on.
type FlightLock = Arc<tokio::sync::Mutex<()>>;

// == Memo Cache ==
/// Shared memoizing cache.
///
/// One entry per call key. A lookup serves the stored value while it is
/// fresh and otherwise invokes the supplied operation, storing its result.
/// The store lock is held only for the lookup and the insert, never while
/// the operation runs, so concurrent callers racing on a missing or stale
/// key may each compute and the last one to finish wins. Enable
/// `single_flight` to de-duplicate those races on the async path.
pub struct MemoCache<V, C = SystemClock> {
    store: Mutex<CacheStore<V>>,
    flights: Mutex<HashMap<String, FlightLock>>,
    clock: C,
    ttl: Duration,
    single_flight: bool,
}

impl<V: Clone> MemoCache<V, SystemClock> {
    /// Creates an empty cache on the system clock.
    pub fn new(ttl: Duration) -> Self {
        Self::build(ttl, false, SystemClock)
    }

    /// Creates an empty cache on the system clock from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<V: Clone, C: Clock> MemoCache<V, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(config: &CacheConfig, clock: C) -> Self {
        Self::build(config.ttl(), config.single_flight, clock)
    }

    fn build(ttl: Duration, single_flight: bool, clock: C) -> Self {
        info!(
            "Memo cache created: ttl={:?}, single_flight={}",
            ttl, single_flight
        );
        Self {
            store: Mutex::new(CacheStore::new()),
            flights: Mutex::new(HashMap::new()),
            clock,
            ttl,
            single_flight,
        }
    }

    // == Get ==
    /// Returns the memoized value for `key`, invoking `compute` when the key
    /// has no entry or its entry is stale.
    ///
    /// `compute` runs at most once per call. Its error is returned unchanged
    /// and leaves the cache exactly as it was.
    pub fn get<F, E>(&self, key: &str, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
        E: From<CacheError>,
    {
        self.check_key(key)?;

        if let Lookup::Fresh(value) = self.lookup(key, true) {
            return Ok(value);
        }

        self.complete(key, compute())
    }

    // == Get Async ==
    /// Async form of [`MemoCache::get`] for operations returning a future.
    ///
    /// With single-flight enabled, concurrent callers for the same missing or
    /// stale key wait for one computation instead of each running their own.
    pub async fn get_async<F, Fut, E>(&self, key: &str, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: From<CacheError>,
    {
        self.check_key(key)?;

        if !self.single_flight {
            if let Lookup::Fresh(value) = self.lookup(key, true) {
                return Ok(value);
            }
            return self.complete(key, compute().await);
        }

        if let Lookup::Fresh(value) = self.lookup(key, false) {
            return Ok(value);
        }

        let flight = self.flight(key);
        let _guard = flight.lock().await;

        // Another caller may have refreshed the key while we waited.
        if let Lookup::Fresh(value) = self.lookup(key, true) {
            return Ok(value);
        }

        self.complete(key, compute().await)
    }

    // == Read-only Accessors ==
    /// Returns the cached value for `key` if it is fresh, without computing.
    pub fn peek(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        self.store.lock().peek(key, now, self.ttl).cloned()
    }

    /// Time since `key` was last refreshed, if it has an entry.
    pub fn age(&self, key: &str) -> Option<Duration> {
        let now = self.clock.now();
        self.store.lock().age(key, now)
    }

    /// Returns true if `key` has an entry, fresh or stale.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.lock().contains_key(key)
    }

    /// Returns the number of memoized keys.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns true if async recomputation is de-duplicated per key.
    pub fn single_flight(&self) -> bool {
        self.single_flight
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    // == Internals ==
    fn check_key(&self, key: &str) -> crate::error::Result<()> {
        validate_key(key).map_err(|err| {
            warn!("Rejected call key {:?}: {}", key, err);
            err
        })
    }

    /// Looks `key` up under the store lock.
    ///
    /// Hits are always counted. Misses and stale entries are counted only
    /// when `record_compute` is set, since the caller is then committed to
    /// computing.
    fn lookup(&self, key: &str, record_compute: bool) -> Lookup<V> {
        let now = self.clock.now();
        let mut store = self.store.lock();
        let lookup = store.lookup(key, now, self.ttl);

        match &lookup {
            Lookup::Fresh(_) => {
                store.record_lookup(&lookup);
                debug!("Cache hit for {}", key);
            }
            Lookup::Stale(age) if record_compute => {
                store.record_lookup(&lookup);
                debug!("Entry for {} is stale (age {:?}), recomputing", key, age);
            }
            Lookup::Missing if record_compute => {
                store.record_lookup(&lookup);
                debug!("Cache miss for {}, computing", key);
            }
            _ => {}
        }

        lookup
    }

    /// Stores a successful result, or counts a failure and leaves the entry alone.
    fn complete<E>(&self, key: &str, result: Result<V, E>) -> Result<V, E> {
        match result {
            Ok(value) => {
                let now = self.clock.now();
                self.store.lock().store(key, value.clone(), now);
                Ok(value)
            }
            Err(err) => {
                self.store.lock().record_failure();
                warn!("Operation for {} failed, cached entry left unchanged", key);
                Err(err)
            }
        }
    }

    fn flight(&self, key: &str) -> FlightLock {
        let mut flights = self.flights.lock();
        match flights.get(key) {
            Some(lock) => Arc::clone(lock),
            None => {
                let lock = FlightLock::default();
                flights.insert(key.to_string(), Arc::clone(&lock));
                lock
            }
        }
    }
}
