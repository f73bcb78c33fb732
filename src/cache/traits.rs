//! Cache collaborator interface.
//!
//! The interface is minimal and domain-agnostic: string keys, raw byte
//! values, per-entry time-to-live. Serialization of cached records is the
//! geocoder's concern, not the cache's.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur during cache operations.
///
/// The geocoder never surfaces these to its callers; failed reads and
/// writes degrade to misses with a warning log.
#[derive(Debug, Error)]
pub enum CacheError {
    /// I/O error during cache operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific error.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Generic key/value cache with per-entry expiry.
///
/// Keys are opaque strings, human-readable for debugging. Values are raw
/// bytes with no serialization opinions imposed. Implementations must be
/// `Send + Sync`; the geocoder treats the cache as the only state shared
/// across calls.
pub trait Cache: Send + Sync {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` for unknown and expired keys alike.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a value under the given key, replacing any existing entry.
    /// The entry expires `ttl` after the write.
    fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError>;
}
