//! The geocoding interface and the two seams a provider plugs into.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::GeocodeError;
use crate::types::{Address, Location};

/// Forward and reverse geocoding.
///
/// `Ok(None)` means the provider answered but had no match.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves a free-text address to a single best-match location.
    async fn geocode(&self, address: &str) -> Result<Option<Location>, GeocodeError>;

    /// Resolves a coordinate to the nearest structured address.
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<Address>, GeocodeError>;
}

/// Builds provider-specific request URLs.
///
/// Implementations do pure string construction and cannot fail. The address
/// handed to [`EndpointBuilder::geocode_url`] is already query-escaped.
pub trait EndpointBuilder: Send + Sync {
    fn geocode_url(&self, address: &str) -> String;

    fn reverse_geocode_url(&self, location: Location) -> String;
}

/// A provider response decoded from JSON, able to produce normalized values.
///
/// The harness deserializes a fresh value for every request, so
/// implementations never see state from a previous call.
pub trait ResponseParser: DeserializeOwned + Send {
    /// Extracts the coordinates of a forward-geocode response.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Provider`] if the provider reported an error.
    fn location(&self) -> Result<Location, GeocodeError>;

    /// Extracts the structured address of a reverse-geocode response.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Provider`] if the provider reported an error.
    fn address(&self) -> Result<Address, GeocodeError>;
}
