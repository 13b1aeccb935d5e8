//! Memoizing Wrappers
//!
//! Explicit adapters that route an operation through a [`MemoCache`] instead
//! of calling it directly.

use std::future::Future;
use std::sync::Arc;

use crate::cache::{Clock, MemoCache, SystemClock};
use crate::error::CacheError;
use crate::memoize::CallKey;

/// Runs `operation` through `cache` under `key`.
pub fn memoize<V, C, F, E>(cache: &MemoCache<V, C>, key: &CallKey, operation: F) -> Result<V, E>
where
    V: Clone,
    C: Clock,
    F: FnOnce() -> Result<V, E>,
    E: From<CacheError>,
{
    cache.get(key, operation)
}

/// Runs the async `operation` through `cache` under `key`.
pub async fn memoize_async<V, C, F, Fut, E>(
    cache: &MemoCache<V, C>,
    key: &CallKey,
    operation: F,
) -> Result<V, E>
where
    V: Clone,
    C: Clock,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<V, E>>,
    E: From<CacheError>,
{
    cache.get_async(key, operation).await
}

// == Memoized Operation ==
/// A zero-argument operation bound to a shared cache and its call key.
///
/// Calling it returns the cached result while fresh and invokes the
/// operation otherwise. Any number of wrappers may share one cache.
pub struct Memoized<V, F, C = SystemClock> {
    cache: Arc<MemoCache<V, C>>,
    key: CallKey,
    operation: F,
}

impl<V, F, C> Memoized<V, F, C> {
    pub fn new(cache: Arc<MemoCache<V, C>>, key: CallKey, operation: F) -> Self {
        Self {
            cache,
            key,
            operation,
        }
    }

    pub fn key(&self) -> &CallKey {
        &self.key
    }

    pub fn cache(&self) -> &Arc<MemoCache<V, C>> {
        &self.cache
    }
}

impl<V: Clone, F, C: Clock> Memoized<V, F, C> {
    /// Returns the memoized result, invoking the operation if needed.
    pub fn call<E>(&self) -> Result<V, E>
    where
        F: Fn() -> Result<V, E>,
        E: From<CacheError>,
    {
        self.cache.get(&self.key, &self.operation)
    }

    /// Async form of [`Memoized::call`].
    pub async fn call_async<Fut, E>(&self) -> Result<V, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<V, E>>,
        E: From<CacheError>,
    {
        self.cache.get_async(&self.key, &self.operation).await
    }
}
