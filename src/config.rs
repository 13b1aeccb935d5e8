//! Configuration Module
//!
//! Handles loading cache configuration from environment variables or from a
//! host application's own config file.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time-to-live for memoized results, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 180;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Seconds a computed value stays fresh after its last refresh
    pub ttl_secs: u64,
    /// De-duplicate concurrent async recomputations of the same key
    pub single_flight: bool,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CACHE_TTL` - TTL in seconds (default: 180)
    /// - `MEMO_CACHE_SINGLE_FLIGHT` - `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> Self {
        Self {
            ttl_secs: env::var("MEMO_CACHE_TTL")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            single_flight: env::var("MEMO_CACHE_SINGLE_FLIGHT")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Returns the TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            single_flight: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
