//! Error types for the response cache
//!
//! Provides unified error handling using thiserror. None of these ever cross
//! the `store`/`clear` boundary of the cache; they are logged and counted
//! there instead.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the response cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// A thread panicked while holding the store lock
    #[error("Cache lock poisoned during {0}")]
    Poisoned(&'static str),

    /// Could not reserve room for a new entry
    #[error("Allocation failed: {0}")]
    Allocation(#[from] std::collections::TryReserveError),

    /// A payload could not be encoded as a cache value
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the response cache.
pub type Result<T> = std::result::Result<T, CacheError>;
