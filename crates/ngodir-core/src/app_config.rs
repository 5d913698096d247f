use std::net::SocketAddr;
use std::path::PathBuf;

use crate::classify::QueryClassifier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub seed_path: PathBuf,
    pub olamaps_api_key: Option<String>,
    pub geocode_base_url: String,
    pub geocode_timeout_secs: u64,
    pub geocode_max_retries: u32,
    pub geocode_retry_backoff_base_ms: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub search_default_radius_km: f64,
    pub search_max_radius_km: f64,
    /// Replaces the built-in classifier indicator list when set.
    pub address_indicators: Option<Vec<String>>,
}

impl AppConfig {
    /// Classifier using the configured indicator list, or the built-in one.
    #[must_use]
    pub fn query_classifier(&self) -> QueryClassifier {
        self.address_indicators
            .as_ref()
            .map_or_else(QueryClassifier::default, QueryClassifier::with_indicators)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("seed_path", &self.seed_path)
            .field("database_url", &"[redacted]")
            .field(
                "olamaps_api_key",
                &self.olamaps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("geocode_base_url", &self.geocode_base_url)
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field("geocode_max_retries", &self.geocode_max_retries)
            .field(
                "geocode_retry_backoff_base_ms",
                &self.geocode_retry_backoff_base_ms,
            )
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("search_default_radius_km", &self.search_default_radius_km)
            .field("search_max_radius_km", &self.search_max_radius_km)
            .field("address_indicators", &self.address_indicators)
            .finish()
    }
}
