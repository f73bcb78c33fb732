//! The geocoding client: query, cache gate and transport wired together.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::{cache_key, Cache};
use crate::error::GeocodeError;
use crate::http::HttpClient;
use crate::query::GeocodeQuery;
use crate::response::{normalize, AddressRecord};

/// Geocoding client over an injected transport and an optional cache.
///
/// Each [`fetch`](Self::fetch) performs at most one outbound request. The
/// client holds no state of its own besides its collaborators; the cache is
/// the only state shared across calls.
pub struct Geocoder<C: HttpClient> {
    http: C,
    cache: Option<Arc<dyn Cache>>,
}

impl<C: HttpClient> Geocoder<C> {
    /// Creates a geocoder without a cache. Every fetch goes to the
    /// transport.
    pub fn new(http: C) -> Self {
        Self { http, cache: None }
    }

    /// Creates a geocoder that consults `cache` before the transport and
    /// writes successful results back to it.
    pub fn with_cache(http: C, cache: Arc<dyn Cache>) -> Self {
        Self {
            http,
            cache: Some(cache),
        }
    }

    /// Resolves a query to a normalized address record.
    ///
    /// Returns `Ok(None)` when the upstream response cannot be parsed or
    /// contains no results — including upstream failure statuses such as
    /// quota exhaustion, which are not distinguished from "not found".
    /// Transport failures surface as `Err` and are never retried.
    ///
    /// The query's cache toggle only gates reads. A successful record is
    /// written to an attached cache even when the query disabled caching,
    /// mirroring the upstream implementation this client was ported from;
    /// the integration tests pin that asymmetry down.
    pub fn fetch(&self, query: &GeocodeQuery) -> Result<Option<AddressRecord>, GeocodeError> {
        let url = query.build_url();
        let key = cache_key(&url);

        if query.cache_enabled() {
            if let Some(record) = self.read_cached(&key) {
                debug!(key = %key, "geocode cache hit");
                return Ok(Some(record));
            }
        }

        let body = self.http.get(&url)?;
        let record = normalize(&body, &url);

        if let (Some(cache), Some(record)) = (&self.cache, &record) {
            match serde_json::to_vec(record) {
                Ok(bytes) => {
                    if let Err(e) = cache.put(&key, bytes, query.ttl()) {
                        warn!(error = %e, key = %key, "geocode cache write failed");
                    }
                }
                Err(e) => {
                    warn!(error = %e, key = %key, "failed to encode record for caching");
                }
            }
        }

        Ok(record)
    }

    /// Reads and validates a cached record.
    ///
    /// Anything that is not a well-formed record with coordinates degrades
    /// to a miss: cache backend failures, stale byte layouts, entries
    /// missing their `lat` field. None of these are surfaced to the caller.
    fn read_cached(&self, key: &str) -> Option<AddressRecord> {
        let cache = self.cache.as_ref()?;

        let bytes = match cache.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, key = %key, "geocode cache read failed");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(error = %e, key = %key, "discarding malformed cache entry");
                None
            }
        }
    }
}
