//! Google Geocoding API client with request-keyed response caching.
//!
//! Resolves a street address, place ID, or postal code plus country into a
//! flat [`AddressRecord`]: coordinates, administrative subdivisions, postal
//! code and the canonical place ID. Only the first upstream result is used.
//!
//! The client is synchronous and holds no state across calls beyond its
//! collaborators: an [`HttpClient`] transport and an optional [`Cache`]
//! keyed by a digest of the exact outbound URL. Retry policy, rate limiting
//! and credential loading are the caller's concern.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use geocoder::{GeocodeQuery, Geocoder, MemoryCache, ReqwestClient};
//!
//! # fn main() -> Result<(), geocoder::GeocodeError> {
//! let http = ReqwestClient::new()?;
//! let geocoder = Geocoder::with_cache(http, Arc::new(MemoryCache::new()));
//!
//! let query = GeocodeQuery::new("YOUR_API_KEY")
//!     .address("1600 Amphitheatre Parkway, Mountain View, CA")
//!     .region("us");
//!
//! if let Some(record) = geocoder.fetch(&query)? {
//!     println!("({}, {}) {}", record.lat, record.lng, record.address);
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod client;
mod error;
mod http;
mod query;
mod response;

pub use cache::{cache_key, Cache, CacheError, CacheStats, MemoryCache};
pub use client::Geocoder;
pub use error::GeocodeError;
pub use http::{HttpClient, ReqwestClient};
pub use query::{is_postal_code, GeocodeQuery, DEFAULT_CACHE_SECONDS, GEOCODE_API_ENDPOINT};
pub use response::{
    normalize, AddressComponent, AddressRecord, GeocodeResponse, GeocodeResult, Geometry, Location,
};
