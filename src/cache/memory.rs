//! In-memory cache with per-entry expiry.
//!
//! A straightforward map of key to value plus expiry instant behind a
//! mutex. Expired entries are dropped lazily when read; there is no
//! background eviction. This is the default collaborator for callers that
//! do not bring their own store, and the test double for this crate's own
//! tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use super::traits::{Cache, CacheError};

struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

/// Point-in-time cache counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Entries currently stored, expired ones included.
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

/// In-memory TTL cache.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Take a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.lock().len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Cache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "cache hit");
                Ok(Some(entry.value.clone()))
            }
            Some(_) => {
                entries.remove(key);
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "cache entry expired");
                Ok(None)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key = %key, "cache miss");
                Ok(None)
            }
        }
    }

    fn put(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), CacheError> {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().insert(key.to_string(), entry);
        debug!(key = %key, ttl_secs = ttl.as_secs(), "cache put");
        Ok(())
    }
}
