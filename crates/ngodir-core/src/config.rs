use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(invalid(var, format!("must be a positive number, got {value}")))
        }
    };

    let database_url = require("DATABASE_URL")?;

    let env = parse_environment(&or_default("NGODIR_ENV", "development"));

    let bind_addr = parse_addr("NGODIR_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("NGODIR_LOG_LEVEL", "info");
    let seed_path = PathBuf::from(or_default(
        "NGODIR_SEED_PATH",
        "./config/organizations.yaml",
    ));

    let olamaps_api_key = lookup("OLA_MAPS_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let geocode_base_url = or_default("NGODIR_GEOCODE_BASE_URL", "https://api.olamaps.io");
    let geocode_timeout_secs = parse_u64("NGODIR_GEOCODE_TIMEOUT_SECS", "10")?;
    let geocode_max_retries = parse_u32("NGODIR_GEOCODE_MAX_RETRIES", "0")?;
    let geocode_retry_backoff_base_ms = parse_u64("NGODIR_GEOCODE_RETRY_BACKOFF_BASE_MS", "500")?;

    let db_max_connections = parse_u32("NGODIR_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("NGODIR_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("NGODIR_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let search_default_radius_km = parse_radius("NGODIR_SEARCH_DEFAULT_RADIUS_KM", "5")?;
    let search_max_radius_km = parse_radius("NGODIR_SEARCH_MAX_RADIUS_KM", "50")?;
    if search_default_radius_km > search_max_radius_km {
        return Err(invalid(
            "NGODIR_SEARCH_DEFAULT_RADIUS_KM",
            format!(
                "default radius {search_default_radius_km} exceeds max radius {search_max_radius_km}"
            ),
        ));
    }

    let address_indicators = lookup("NGODIR_ADDRESS_INDICATORS")
        .ok()
        .map(|raw| parse_indicator_list(&raw))
        .filter(|list| !list.is_empty());

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        seed_path,
        olamaps_api_key,
        geocode_base_url,
        geocode_timeout_secs,
        geocode_max_retries,
        geocode_retry_backoff_base_ms,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        search_default_radius_km,
        search_max_radius_km,
        address_indicators,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

/// Split a comma-separated indicator list into lowercase, trimmed entries.
fn parse_indicator_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
