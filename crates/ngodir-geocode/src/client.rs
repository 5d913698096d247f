//! HTTP client for the Ola Maps places API.
//!
//! Wraps `reqwest` with API-key handling, per-call tracing ids, and typed
//! response decoding. A response only counts as a hit when `"status"` is
//! `"ok"` and at least one result is present; anything else becomes a
//! [`GeocodeError`] carrying the upstream `message` when one was sent.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::{GeocodeError, UNABLE_TO_GEOCODE, UNABLE_TO_REVERSE_GEOCODE};
use crate::request_id::{generate_correlation_id, generate_request_id};
use crate::retry::retry_with_backoff;
use crate::types::{ForwardResponse, GeocodeResult, ReverseGeocodeResult, ReverseResponse};

const DEFAULT_BASE_URL: &str = "https://api.olamaps.io/";
const DEFAULT_LANGUAGE: &str = "English";
const GEOCODE_PATH: &str = "places/v1/geocode";
const REVERSE_GEOCODE_PATH: &str = "places/v1/reverse-geocode";

#[derive(Debug, Clone, Copy)]
enum Operation {
    Forward,
    Reverse,
}

impl Operation {
    fn failure(self, status: Option<u16>, message: Option<String>) -> GeocodeError {
        match self {
            Operation::Forward => GeocodeError::Geocode {
                status,
                message: message.unwrap_or_else(|| UNABLE_TO_GEOCODE.to_string()),
            },
            Operation::Reverse => GeocodeError::ReverseGeocode {
                status,
                message: message.unwrap_or_else(|| UNABLE_TO_REVERSE_GEOCODE.to_string()),
            },
        }
    }

    fn context(self) -> &'static str {
        match self {
            Operation::Forward => "geocode",
            Operation::Reverse => "reverse-geocode",
        }
    }
}

/// Client for the Ola Maps geocoding endpoints.
///
/// Use [`OlaMapsClient::new`] for production or
/// [`OlaMapsClient::with_base_url`] to point at a mock server in tests.
/// Calls are single-shot unless [`OlaMapsClient::with_retry`] opts in.
#[derive(Debug, Clone)]
pub struct OlaMapsClient {
    client: Client,
    api_key: String,
    base_url: Url,
    language: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl OlaMapsClient {
    /// Creates a new client pointed at the production Ola Maps API.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, GeocodeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent("ngodir/0.1 (organization-search)")
            .build()?;

        // Exactly one trailing slash so `Url::join` appends endpoint paths
        // instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            language: DEFAULT_LANGUAGE.to_owned(),
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Enable bounded retries on transient failures (timeouts, 429, 5xx).
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        language.clone_into(&mut self.language);
        self
    }

    /// Forward-geocode a free-text address. The address is trimmed before
    /// it is sent.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Geocode`] if the upstream rejects the request or has
    ///   no result for the address.
    /// - [`GeocodeError::Http`] on network failure.
    /// - [`GeocodeError::Deserialize`] if the response has an unexpected shape.
    pub async fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let address = address.trim();
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.geocode_once(address)
        })
        .await
        .inspect_err(|e| tracing::error!(error = %e, address, "Ola Maps geocoding error"))
    }

    /// Reverse-geocode a coordinate pair into a formatted address.
    ///
    /// # Errors
    ///
    /// Same as [`OlaMapsClient::geocode`], with
    /// [`GeocodeError::ReverseGeocode`] in place of `Geocode`.
    pub async fn reverse_geocode(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<ReverseGeocodeResult, GeocodeError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.reverse_geocode_once(lat, lng)
        })
        .await
        .inspect_err(|e| tracing::error!(error = %e, lat, lng, "Ola Maps reverse geocoding error"))
    }

    async fn geocode_once(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let op = Operation::Forward;
        let url = self.build_url(
            GEOCODE_PATH,
            &[("address", address), ("language", &self.language)],
        )?;
        let body = self.request_json(&url, op).await?;
        let parsed: ForwardResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("{}(address={address})", op.context()),
                source: e,
            })?;

        if is_ok_status(&parsed.status) {
            if let Some(first) = parsed.geocoding_results.into_iter().next() {
                return Ok(first.into());
            }
        }
        Err(op.failure(None, None))
    }

    async fn reverse_geocode_once(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<ReverseGeocodeResult, GeocodeError> {
        let op = Operation::Reverse;
        let latlng = format!("{lat},{lng}");
        let url = self.build_url(
            REVERSE_GEOCODE_PATH,
            &[("latlng", &latlng), ("language", &self.language)],
        )?;
        let body = self.request_json(&url, op).await?;
        let parsed: ReverseResponse =
            serde_json::from_value(body).map_err(|e| GeocodeError::Deserialize {
                context: format!("{}(latlng={latlng})", op.context()),
                source: e,
            })?;

        if is_ok_status(&parsed.status) {
            if let Some(first) = parsed.results.into_iter().next() {
                return Ok(first.into());
            }
        }
        Err(op.failure(None, None))
    }

    /// Builds the endpoint URL with percent-encoded query parameters,
    /// appending the API key last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GeocodeError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| GeocodeError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("api_key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET with fresh tracing ids and parses the body as JSON.
    ///
    /// Non-2xx responses become an operation failure carrying the upstream
    /// status and, when the body has one, its `message` field.
    async fn request_json(
        &self,
        url: &Url,
        op: Operation,
    ) -> Result<serde_json::Value, GeocodeError> {
        let request_id = generate_request_id();
        let correlation_id = generate_correlation_id();
        tracing::debug!(
            request_id = %request_id,
            correlation_id = %correlation_id,
            endpoint = url.path(),
            "sending geocoding request"
        );

        let response = self
            .client
            .get(url.clone())
            .header("X-Request-Id", request_id)
            .header("X-Correlation-Id", correlation_id)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(op.failure(Some(status.as_u16()), upstream_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
            context: op.context().to_string(),
            source: e,
        })
    }
}

fn is_ok_status(status: &str) -> bool {
    status == "ok"
}

/// Pull the `message` field out of an error body, if the body is JSON and
/// has one.
fn upstream_message(status: StatusCode, body: &str) -> Option<String> {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()?
        .trim()
        .to_string();
    if message.is_empty() {
        tracing::debug!(%status, "upstream error body had an empty message");
        None
    } else {
        Some(message)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
