//! Error types for the memoizing cache
//!
//! Provides the cache's own error type using thiserror. Errors raised by a
//! wrapped operation are never represented here: they are handed back to the
//! caller unchanged.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors produced by the cache itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Call key is empty or otherwise unusable
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

// == Key Validation ==
/// Rejects keys that cannot identify an operation.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(CacheError::InvalidKey(
            "Key cannot be empty or whitespace".to_string(),
        ));
    }
    Ok(())
}
