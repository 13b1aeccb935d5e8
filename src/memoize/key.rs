//! Call Keys
//!
//! Stable identities for memoized operations.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use crate::error::{validate_key, Result};

// == Call Key ==
/// Identity of a memoizable operation, such as its fully qualified path.
///
/// A key names the operation, not an argument tuple: every call through the
/// same key shares one cached result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallKey(String);

impl CallKey {
    /// Creates a key, rejecting empty or whitespace-only identities.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self(key))
    }

    /// Creates a key of the form `scope::name`.
    pub fn qualified(scope: &str, name: &str) -> Result<Self> {
        Self::new(format!("{}::{}", scope, name))
    }

    /// Creates a key from a compile-time identity produced by [`call_key!`].
    #[doc(hidden)]
    pub fn from_static(key: &'static str) -> Self {
        Self(key.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for CallKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CallKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CallKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a [`CallKey`] for `name` qualified by the calling module's path.
///
/// ```
/// use memo_cache::call_key;
///
/// let key = call_key!(find_all_notes);
/// assert!(key.as_str().ends_with("::find_all_notes"));
/// ```
#[macro_export]
macro_rules! call_key {
    ($name:ident) => {
        $crate::memoize::CallKey::from_static(concat!(module_path!(), "::", stringify!($name)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[test]
    fn test_new_rejects_blank() {
        assert!(matches!(CallKey::new(""), Err(CacheError::InvalidKey(_))));
        assert!(matches!(CallKey::new(" "), Err(CacheError::InvalidKey(_))));
    }

    #[test]
    fn test_qualified() {
        let key = CallKey::qualified("notes::repository", "find_all").unwrap();
        assert_eq!(key.as_str(), "notes::repository::find_all");
        assert_eq!(key.to_string(), "notes::repository::find_all");
    }

    #[test]
    fn test_call_key_macro_uses_module_path() {
        let key = call_key!(load_settings);
        assert_eq!(
            key.as_str(),
            concat!(module_path!(), "::load_settings")
        );
        assert!(key.starts_with("memo_cache::memoize::key::tests"));
    }
}
