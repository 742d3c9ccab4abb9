//! `MapQuest` Nominatim response shape and its normalization.

use geokit_core::osm::null_as_default;
use geokit_core::{Address, GeocodeError, Location, Operation, OsmAddress, ResponseParser};
use serde::Deserialize;

/// One result object from `search.php` or `reverse.php`.
///
/// `lat` and `lon` arrive as strings. When `error` is non-empty the other
/// fields carry nothing useful. A `null` field reads as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeocodeResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lat: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub error: String,
    #[serde(deserialize_with = "null_as_default")]
    pub address: OsmAddress,
}

impl ResponseParser for GeocodeResponse {
    fn location(&self) -> Result<Location, GeocodeError> {
        if !self.error.is_empty() {
            return Err(GeocodeError::provider(Operation::Geocode, &self.error));
        }

        Ok(Location::new(
            parse_coordinate("lat", &self.lat),
            parse_coordinate("lon", &self.lon),
        ))
    }

    fn address(&self) -> Result<Address, GeocodeError> {
        if !self.error.is_empty() {
            return Err(GeocodeError::provider(
                Operation::ReverseGeocode,
                &self.error,
            ));
        }

        let addr = &self.address;
        Ok(Address {
            formatted_address: self.display_name.clone(),
            house_number: addr.house_number.clone(),
            street: addr.street().to_owned(),
            suburb: addr.suburb.clone(),
            city: addr.locality().to_owned(),
            state: addr.state.clone(),
            state_district: addr.state_district.clone(),
            county: addr.county.clone(),
            postcode: addr.postcode.clone(),
            country: addr.country.clone(),
            country_code: addr.country_code.to_uppercase(),
        })
    }
}

/// Parses a coordinate string, falling back to `0.0`.
///
/// The string must be a bare number; surrounding whitespace also falls back.
/// The fallback is logged so a malformed provider payload is visible.
fn parse_coordinate(field: &'static str, raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(field, raw, error = %e, "unparseable coordinate, using 0.0");
            0.0
        }
    }
}
