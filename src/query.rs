//! Geocoding request construction.
//!
//! [`GeocodeQuery`] collects the optional location-identifying fields for a
//! single lookup and renders them into the canonical request URL. Field
//! order in the URL is fixed: the cache layer keys entries by a digest of
//! the URL, so byte-identical queries must always produce byte-identical
//! URLs.

use std::fmt::Write as _;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

/// Geocoding URL endpoint.
pub const GEOCODE_API_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Default cache lifetime for geocoding responses: 24 hours.
pub const DEFAULT_CACHE_SECONDS: u64 = 86_400;

static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-]+$").expect("valid pattern"));

/// A single geocoding lookup, built fluently.
///
/// No field besides the API key is required; an empty query is a legal, if
/// useless, request. Whether a query is *usable* is the caller's concern —
/// the builder validates individual fields only, never cross-field
/// consistency.
///
/// # Example
///
/// ```
/// use geocoder::GeocodeQuery;
///
/// let query = GeocodeQuery::new("API_KEY")
///     .address("1600 Amphitheatre Parkway")
///     .country("US")
///     .postal_code("94043");
///
/// assert!(query.build_url().contains("components=country:us|postal_code:94043"));
/// ```
#[derive(Debug, Clone)]
pub struct GeocodeQuery {
    api_key: String,
    address: Option<String>,
    place_id: Option<String>,
    postal_code: Option<String>,
    language: Option<String>,
    region: Option<String>,
    country: Option<String>,
    use_cache: bool,
    cache_seconds: u64,
}

impl GeocodeQuery {
    /// Creates a query with caching enabled and the default TTL.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            address: None,
            place_id: None,
            postal_code: None,
            language: None,
            region: None,
            country: None,
            use_cache: true,
            cache_seconds: DEFAULT_CACHE_SECONDS,
        }
    }

    /// Replaces the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Free-text address to geocode.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Upstream place ID to resolve instead of (or in addition to) a
    /// free-text address. Embedded in the URL verbatim, not percent-encoded.
    pub fn place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    /// Postal code, used only together with [`country`](Self::country) and
    /// only when it passes [`is_postal_code`]; otherwise silently dropped
    /// from the request.
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    /// Language for the returned response.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Region bias for the lookup, as a ccTLD code. Lowercased on the way
    /// in; `"gb"` is normalized to `"uk"` because the United Kingdom's
    /// ccTLD is `uk` (.co.uk) while its ISO 3166-1 code is `gb`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        let mut region = region.into().to_lowercase();
        if region == "gb" {
            region = String::from("uk");
        }
        self.region = Some(region);
        self
    }

    /// Country filter for the `components` parameter.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Overrides the cache TTL for this query.
    pub fn cache_seconds(mut self, seconds: u64) -> Self {
        self.cache_seconds = seconds;
        self
    }

    /// Disables cache reads for this query.
    ///
    /// Note that a successful result is still written to an attached cache;
    /// see [`Geocoder::fetch`](crate::Geocoder::fetch).
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    /// Whether cache reads are enabled for this query.
    pub fn cache_enabled(&self) -> bool {
        self.use_cache
    }

    /// Cache TTL for entries written on behalf of this query.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_seconds)
    }

    /// Renders the canonical request URL.
    ///
    /// Pure with respect to the query's fields: calling it twice yields
    /// byte-identical strings. Parameter order is fixed (`key`, `place_id`,
    /// `address`, `language`, `region`, `components`).
    pub fn build_url(&self) -> String {
        let mut url = format!("{}?key={}", GEOCODE_API_ENDPOINT, self.api_key);

        if let Some(place_id) = &self.place_id {
            url.push_str("&place_id=");
            url.push_str(place_id);
        }

        if let Some(address) = &self.address {
            url.push_str("&address=");
            url.push_str(&urlencode(address));
        }

        if let Some(language) = &self.language {
            url.push_str("&language=");
            url.push_str(language);
        }

        if let Some(region) = &self.region {
            url.push_str("&region=");
            url.push_str(region);
        }

        if let Some(country) = &self.country {
            url.push_str("&components=country:");
            url.push_str(&country.to_lowercase());

            if let Some(postal_code) = &self.postal_code {
                let stripped: String = postal_code
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                if is_postal_code(&stripped) {
                    url.push_str("|postal_code:");
                    url.push_str(&urlencode(&stripped));
                }
            }
        }

        url
    }
}

/// Whether a postal code is usable in a `components` filter: after
/// removing all whitespace, it must consist of digits and hyphens only.
///
/// Exposed so callers can pre-validate before building a query.
pub fn is_postal_code(postal_code: &str) -> bool {
    let stripped: String = postal_code.chars().filter(|c| !c.is_whitespace()).collect();
    POSTAL_CODE.is_match(&stripped)
}

/// Percent-encode a string for use in a URL query parameter.
///
/// Matches the upstream service's expectations for form-style encoding:
/// alphanumerics and `-`, `_`, `.` pass through, space becomes `+`, every
/// other byte becomes `%XX`.
fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
