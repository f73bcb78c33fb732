//! Upstream response schema and normalization.
//!
//! The geocoding service returns a deeply nested document; this module
//! deserializes it into a typed schema and projects the first result into a
//! flat [`AddressRecord`]. Everything the upstream marks optional stays
//! optional here; ordering of `results`, `address_components` and `types`
//! is significant and is never re-sorted.
//!
//! Upstream failure statuses (quota exceeded, authorization denied) arrive
//! with an empty `results` list and collapse into the same absent outcome
//! as a genuine "address not found". The raw `status` and `error_message`
//! are only surfaced in debug logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Top-level upstream document.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One upstream result. Only the first element of `results` is ever used.
#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub place_id: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Result geometry. The coordinates are typed; everything else the
/// upstream puts next to them (viewport, bounds, location_type) is carried
/// through opaquely so the record round-trips it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub location: Location,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// A geographic coordinate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// One labeled piece of a structured address, tagged with one or more type
/// labels by the upstream provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub long_name: String,
}

/// Normalized geocoding result, flat and immutable.
///
/// Constructed once per successful normalization; either returned directly
/// or serialized into the cache and returned. `url` records the exact
/// request that produced the record, for auditing and for correlating
/// cached entries with their origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressRecord {
    pub place_id: String,
    pub lat: f64,
    pub lng: f64,
    /// Street number and route, space-joined and trimmed. Empty when the
    /// result carries neither component.
    pub address: String,
    pub country: Option<String>,
    pub country_long: Option<String>,
    pub postal_code: Option<String>,
    pub neighborhood: Option<String>,
    pub sublocality: Option<String>,
    pub locality: Option<String>,
    pub administrative_area_level_1: Option<String>,
    pub administrative_area_level_2: Option<String>,
    pub administrative_area_level_3: Option<String>,
    /// Upstream geometry, passed through verbatim.
    pub geometry: Geometry,
    /// First entry of the result's type list, or empty when absent.
    #[serde(rename = "type")]
    pub address_type: String,
    /// The exact request URL that produced this record.
    pub url: String,
}

/// Short or long form of an address component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameForm {
    Short,
    Long,
}

/// Returns the requested form of the first component whose type set
/// contains `kind`. First match wins; ties are resolved by encounter order
/// in the upstream list.
fn address_component(
    components: &[AddressComponent],
    kind: &str,
    form: NameForm,
) -> Option<String> {
    components
        .iter()
        .find(|component| component.types.iter().any(|t| t == kind))
        .map(|component| match form {
            NameForm::Short => component.short_name.clone(),
            NameForm::Long => component.long_name.clone(),
        })
}

/// Projects a raw upstream body into an [`AddressRecord`].
///
/// Returns `None` when the body is not parseable or the parsed document has
/// no results. The two cases are deliberately indistinguishable to the
/// caller; distinguishing quota exhaustion from "not found" requires going
/// to the upstream status, which this normalizer only logs.
pub fn normalize(body: &str, url: &str) -> Option<AddressRecord> {
    let response: GeocodeResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            debug!(error = %e, "failed to parse geocoding response");
            return None;
        }
    };

    let Some(result) = response.results.into_iter().next() else {
        debug!(
            status = response.status.as_deref().unwrap_or(""),
            error_message = response.error_message.as_deref().unwrap_or(""),
            "geocoding response contained no results"
        );
        return None;
    };

    let components = &result.address_components;

    let street_number =
        address_component(components, "street_number", NameForm::Short).unwrap_or_default();
    let route = address_component(components, "route", NameForm::Short).unwrap_or_default();
    let address = format!("{} {}", street_number, route).trim().to_string();

    Some(AddressRecord {
        place_id: result.place_id,
        lat: result.geometry.location.lat,
        lng: result.geometry.location.lng,
        address,
        country: address_component(components, "country", NameForm::Short),
        country_long: address_component(components, "country", NameForm::Long),
        postal_code: address_component(components, "postal_code", NameForm::Short),
        neighborhood: address_component(components, "neighborhood", NameForm::Short),
        sublocality: address_component(components, "sublocality", NameForm::Short),
        locality: address_component(components, "locality", NameForm::Short),
        administrative_area_level_1: address_component(
            components,
            "administrative_area_level_1",
            NameForm::Long,
        ),
        administrative_area_level_2: address_component(
            components,
            "administrative_area_level_2",
            NameForm::Long,
        ),
        administrative_area_level_3: address_component(
            components,
            "administrative_area_level_3",
            NameForm::Long,
        ),
        address_type: result.types.first().cloned().unwrap_or_default(),
        geometry: result.geometry,
        url: url.to_string(),
    })
}
