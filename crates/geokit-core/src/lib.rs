//! Provider-neutral geocoding building blocks.
//!
//! [`Geocoder`] is the interface callers program against. [`HttpGeocoder`]
//! implements it for any JSON-over-HTTP provider that supplies an
//! [`EndpointBuilder`] and a [`ResponseParser`].

pub mod app_config;
pub mod config;
pub mod error;
pub mod geocoder;
pub mod http;
pub mod osm;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, GeocodeError, Operation};
pub use geocoder::{EndpointBuilder, Geocoder, ResponseParser};
pub use http::{
    query_escape, redact_key, HttpGeocoder, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
pub use osm::OsmAddress;
pub use types::{Address, Location};
