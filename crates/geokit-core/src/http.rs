//! Generic HTTP harness for JSON geocoding providers.
//!
//! [`HttpGeocoder`] owns the `reqwest` client and the request lifecycle. The
//! provider contributes an [`EndpointBuilder`] for URLs and a
//! [`ResponseParser`] type that the response body is decoded into.

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;

use crate::error::GeocodeError;
use crate::geocoder::{EndpointBuilder, Geocoder, ResponseParser};
use crate::types::{Address, Location};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 8;
pub const DEFAULT_USER_AGENT: &str = "geokit/0.1 (geocoding)";

/// Characters left unescaped in a query component: ASCII alphanumerics and
/// `-`, `_`, `.`, `~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Geocoder that talks to a JSON-over-HTTP provider.
///
/// `E` builds the request URLs; `P` is the provider's response shape. Use
/// [`HttpGeocoder::new`] for the default timeout and user agent or
/// [`HttpGeocoder::with_options`] to set them.
pub struct HttpGeocoder<E, P> {
    client: Client,
    endpoint: E,
    timeout_secs: u64,
    parser: PhantomData<fn() -> P>,
}

impl<E, P> HttpGeocoder<E, P>
where
    E: EndpointBuilder,
    P: ResponseParser,
{
    /// Creates a geocoder with the default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(endpoint: E) -> Result<Self, GeocodeError> {
        Self::with_options(endpoint, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT)
    }

    /// Creates a geocoder with an explicit request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_options(
        endpoint: E,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
            parser: PhantomData,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &E {
        &self.endpoint
    }

    /// The URL a forward geocode of `address` would request.
    #[must_use]
    pub fn geocode_url(&self, address: &str) -> String {
        self.endpoint.geocode_url(&query_escape(address))
    }

    /// The URL a reverse geocode of (`lat`, `lng`) would request.
    #[must_use]
    pub fn reverse_geocode_url(&self, lat: f64, lng: f64) -> String {
        self.endpoint.reverse_geocode_url(Location::new(lat, lng))
    }

    /// Sends a GET request, asserts a 2xx status, and decodes the body into
    /// a fresh `P`. Returns `None` when the provider had no match.
    async fn fetch(&self, url: &str) -> Result<Option<P>, GeocodeError> {
        let redacted = redact_key(url);
        tracing::debug!(url = %redacted, "sending geocoder request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let response = response
            .error_for_status()
            .map_err(|e| GeocodeError::Http(e.without_url()))?;
        let body = response.text().await.map_err(|e| self.classify(e))?;

        tracing::debug!(url = %redacted, bytes = body.len(), "received geocoder response");
        decode_single(&body, &redacted)
    }

    /// Maps a transport error, dropping the request URL so the API key never
    /// reaches error messages.
    fn classify(&self, err: reqwest::Error) -> GeocodeError {
        if err.is_timeout() {
            GeocodeError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            GeocodeError::Http(err.without_url())
        }
    }
}

#[async_trait]
impl<E, P> Geocoder for HttpGeocoder<E, P>
where
    E: EndpointBuilder,
    P: ResponseParser,
{
    async fn geocode(&self, address: &str) -> Result<Option<Location>, GeocodeError> {
        let url = self.geocode_url(address);
        let Some(parser) = self.fetch(&url).await? else {
            return Ok(None);
        };
        parser.location().map(Some)
    }

    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Option<Address>, GeocodeError> {
        let url = self.reverse_geocode_url(lat, lng);
        let Some(parser) = self.fetch(&url).await? else {
            return Ok(None);
        };
        parser.address().map(Some)
    }
}

/// Escapes `s` for use as a URL query value: unreserved characters pass
/// through, spaces become `+`, everything else is percent-encoded.
#[must_use]
pub fn query_escape(s: &str) -> String {
    s.split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// Replaces the value of any `key` query parameter with `[redacted]` so URLs
/// can be logged.
#[must_use]
pub fn redact_key(url: &str) -> String {
    let Some((base, query)) = url.split_once('?') else {
        return url.to_owned();
    };
    let pairs = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("key=") {
                "key=[redacted]"
            } else {
                pair
            }
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{base}?{pairs}")
}

/// Decodes a provider body holding at most one result.
///
/// Search endpoints answer with an array, so the first element is taken.
/// A blank body, `[]`, or `{}` means no match.
fn decode_single<P: ResponseParser>(body: &str, context: &str) -> Result<Option<P>, GeocodeError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| GeocodeError::Deserialize {
            context: context.to_owned(),
            source: e,
        })?;

    let value = match value {
        serde_json::Value::Array(items) => match items.into_iter().next() {
            Some(first) => first,
            None => return Ok(None),
        },
        serde_json::Value::Object(map) if map.is_empty() => return Ok(None),
        other => other,
    };

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| GeocodeError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
}
