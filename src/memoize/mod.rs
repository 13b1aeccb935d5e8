//! Memoize Module
//!
//! Explicit invocation adapters: derive a call key for an operation and route
//! its invocations through a shared [`MemoCache`](crate::cache::MemoCache).

mod key;
mod wrapper;

pub use key::CallKey;
pub use wrapper::{memoize, memoize_async, Memoized};
