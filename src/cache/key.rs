//! Cache keys for geocoding requests.

use sha2::{Digest, Sha256};

/// Key prefix for geocoding entries.
const GEOCODE_CACHE_PREFIX: &str = "googleapis-geocode";

/// Derives the cache key for a fully built request URL.
///
/// The key is a prefixed SHA-256 digest of the URL bytes: byte-identical
/// URLs always map to the same key, and any field change that alters the
/// URL changes the key.
pub fn cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{}-{:x}", GEOCODE_CACHE_PREFIX, hasher.finalize())
}
