pub mod app_config;
pub mod classify;
pub mod config;
pub mod geo;
pub mod organizations;
pub mod seed;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use classify::{normalize_query, QueryClassifier, DEFAULT_ADDRESS_INDICATORS};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{format_distance, haversine_km, is_valid_coordinates, BoundingBox, GeoPoint};
pub use organizations::{
    searchable_keywords, slug_from_name, Address, Contact, Location, Organization,
    OrganizationStatus, OrganizationType, UserSubmission, VerificationBadge,
};
pub use seed::{load_organization_seeds, parse_seed_file, OrganizationSeed, SeedFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[source] serde_yaml::Error),

    #[error("seed validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid organization type: {0}")]
    InvalidOrganizationType(String),

    #[error("invalid organization status: {0}")]
    InvalidOrganizationStatus(String),

    #[error("invalid verification badge: {0}")]
    InvalidVerificationBadge(String),
}
