use std::fmt;

use thiserror::Error;

/// Which geocoding direction produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Geocode,
    ReverseGeocode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Geocode => write!(f, "geocode"),
            Operation::ReverseGeocode => write!(f, "reverse geocode"),
        }
    }
}

/// Errors returned by geocoders.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The provider answered, but its payload carried an error message.
    #[error("{operation} error: {message}")]
    Provider { operation: Operation, message: String },

    /// Network or TLS failure, or a non-2xx status, from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GeocodeError {
    /// Shorthand for a [`GeocodeError::Provider`] built from a provider message.
    #[must_use]
    pub fn provider(operation: Operation, message: impl Into<String>) -> Self {
        Self::Provider {
            operation,
            message: message.into(),
        }
    }
}

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
