//! Request URLs for the `MapQuest` Nominatim API.

use std::fmt;

use geokit_core::{EndpointBuilder, Location};

pub const DEFAULT_BASE_URL: &str = "http://open.mapquestapi.com/nominatim/v1/";

/// Base URL plus API key for one `MapQuest` account.
///
/// The key is owned by the endpoint, so endpoints for different accounts can
/// be used side by side.
#[derive(Clone)]
pub struct Endpoint {
    base_url: String,
    api_key: String,
}

impl Endpoint {
    /// An endpoint pointed at the public `MapQuest` Nominatim API.
    #[must_use]
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// An endpoint with a custom base URL. The URL is used verbatim as the
    /// prefix of `search.php` and `reverse.php`.
    #[must_use]
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url)
            .field("api_key", &"[redacted]")
            .finish()
    }
}

impl EndpointBuilder for Endpoint {
    /// Always asks for a single result.
    fn geocode_url(&self, address: &str) -> String {
        format!(
            "{}search.php?key={}&format=json&limit=1&q={address}",
            self.base_url, self.api_key
        )
    }

    fn reverse_geocode_url(&self, location: Location) -> String {
        format!(
            "{}reverse.php?key={}&format=json&lat={:.6}&lon={:.6}",
            self.base_url, self.api_key, location.lat, location.lng
        )
    }
}
