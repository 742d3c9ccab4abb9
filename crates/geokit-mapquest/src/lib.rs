//! `MapQuest` Nominatim provider for `geokit`.
//!
//! [`geocoder`] wires an [`Endpoint`] (URL construction, API key) and the
//! [`GeocodeResponse`] parser into the generic [`HttpGeocoder`] harness.

pub mod endpoint;
pub mod response;

use geokit_core::{AppConfig, GeocodeError, HttpGeocoder};

pub use endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use response::GeocodeResponse;

/// A geocoder bound to the `MapQuest` Nominatim API.
pub type MapQuestGeocoder = HttpGeocoder<Endpoint, GeocodeResponse>;

/// Creates a `MapQuest` Nominatim geocoder.
///
/// `base_url` overrides [`DEFAULT_BASE_URL`]; it must end with a slash.
///
/// # Errors
///
/// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed.
pub fn geocoder(api_key: &str, base_url: Option<&str>) -> Result<MapQuestGeocoder, GeocodeError> {
    HttpGeocoder::new(Endpoint::with_base_url(
        api_key,
        base_url.unwrap_or(DEFAULT_BASE_URL),
    ))
}

/// Creates a `MapQuest` Nominatim geocoder from loaded application config.
///
/// # Errors
///
/// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
/// cannot be constructed.
pub fn geocoder_from_config(config: &AppConfig) -> Result<MapQuestGeocoder, GeocodeError> {
    let endpoint = Endpoint::with_base_url(
        &config.mapquest_api_key,
        config.mapquest_base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
    );
    HttpGeocoder::with_options(endpoint, config.request_timeout_secs, &config.user_agent)
}
