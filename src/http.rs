//! HTTP client abstraction for testability
//!
//! The geocoding core only needs a GET returning the response body as text.
//! Keeping that behind a trait allows dependency injection and mock clients
//! in tests. Status interpretation beyond the client's own success check is
//! deliberately out of scope here.

use crate::error::GeocodeError;

/// Default request timeout for the real client.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Trait for HTTP client operations.
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as text or an error.
    fn get(&self, url: &str) -> Result<String, GeocodeError>;
}

/// Real HTTP client implementation using reqwest.
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, GeocodeError> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    /// Creates a new ReqwestClient with a custom timeout.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GeocodeError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String, GeocodeError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| GeocodeError::Http(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Http(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .map_err(|e| GeocodeError::Http(format!("Failed to read response: {}", e)))
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    /// Mock HTTP client for testing.
    ///
    /// Replays a canned response on every call and records the requested
    /// URLs. Clones share the request log, so tests can hand a clone to the
    /// geocoder and inspect traffic through the original.
    #[derive(Clone)]
    pub struct MockHttpClient {
        response: Result<String, GeocodeError>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl MockHttpClient {
        pub fn returning(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                response: Err(GeocodeError::Http(message.to_string())),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Number of GETs performed so far.
        pub fn request_count(&self) -> usize {
            self.requests.lock().len()
        }

        /// URLs requested so far, in call order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().clone()
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str) -> Result<String, GeocodeError> {
            self.requests.lock().push(url.to_string());
            self.response.clone()
        }
    }

    #[test]
    fn mock_client_replays_body_and_records_urls() {
        let mock = MockHttpClient::returning("{}");

        assert_eq!(mock.get("http://example.com/a").unwrap(), "{}");
        assert_eq!(mock.get("http://example.com/b").unwrap(), "{}");

        assert_eq!(mock.request_count(), 2);
        assert_eq!(
            mock.requests(),
            vec!["http://example.com/a", "http://example.com/b"]
        );
    }

    #[test]
    fn mock_client_clones_share_the_request_log() {
        let mock = MockHttpClient::returning("{}");
        let clone = mock.clone();

        clone.get("http://example.com").unwrap();
        assert_eq!(mock.request_count(), 1);
    }

    #[test]
    fn mock_client_error() {
        let mock = MockHttpClient::failing("Test error");
        assert!(mock.get("http://example.com").is_err());
    }
}
