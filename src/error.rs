//! Error types for the geocoding client.

use thiserror::Error;

/// Errors surfaced by the geocoding client.
///
/// Only transport-level failures are reported as errors. A response that
/// cannot be parsed, or that contains no results, is an absent result
/// (`Ok(None)` from [`Geocoder::fetch`](crate::Geocoder::fetch)), not an
/// error. Cache anomalies degrade to misses and are never surfaced.
#[derive(Debug, Clone, Error)]
pub enum GeocodeError {
    /// The HTTP transport failed: connection error, timeout, or a
    /// non-success status reported by the client implementation.
    #[error("HTTP error: {0}")]
    Http(String),
}
