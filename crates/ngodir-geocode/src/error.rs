use thiserror::Error;

pub(crate) const UNABLE_TO_GEOCODE: &str = "Unable to geocode address";
pub(crate) const UNABLE_TO_REVERSE_GEOCODE: &str = "Unable to reverse geocode coordinates";

/// Errors returned by the Ola Maps client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Forward geocoding failed: the upstream rejected the request or
    /// returned no results. `message` is the upstream message when it sent
    /// one.
    #[error("{message}")]
    Geocode {
        status: Option<u16>,
        message: String,
    },

    /// Reverse geocoding failed, same shape as [`GeocodeError::Geocode`].
    #[error("{message}")]
    ReverseGeocode {
        status: Option<u16>,
        message: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid geocoding base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl GeocodeError {
    /// Upstream HTTP status, when the failure came from a non-2xx response.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            GeocodeError::Http(e) => e.status().map(|s| s.as_u16()),
            GeocodeError::Geocode { status, .. } | GeocodeError::ReverseGeocode { status, .. } => {
                *status
            }
            GeocodeError::Deserialize { .. } | GeocodeError::InvalidBaseUrl { .. } => None,
        }
    }

    /// `true` when the upstream answered but had nothing for the input.
    #[must_use]
    pub fn is_no_result(&self) -> bool {
        matches!(
            self,
            GeocodeError::Geocode { status: None, .. }
                | GeocodeError::ReverseGeocode { status: None, .. }
        )
    }
}
