//! Caching layer keyed by the outbound request URL.
//!
//! The geocoder talks to any [`Cache`] implementation through a minimal
//! byte-valued interface; [`MemoryCache`] is the bundled default. Keys are
//! derived from the fully built request URL by [`cache_key`].

mod key;
mod memory;
mod traits;

pub use key::cache_key;
pub use memory::{CacheStats, MemoryCache};
pub use traits::{Cache, CacheError};
