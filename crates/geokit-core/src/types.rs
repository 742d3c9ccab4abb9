use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A structured postal address, normalized across providers.
///
/// Fields the provider did not report are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub formatted_address: String,
    pub house_number: String,
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub state: String,
    pub state_district: String,
    pub county: String,
    pub postcode: String,
    pub country: String,
    /// ISO 3166-1 alpha-2 code, uppercase.
    pub country_code: String,
}
