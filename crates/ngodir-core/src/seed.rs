//! Organization seed file (`config/organizations.yaml`).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::is_valid_coordinates;
use crate::organizations::{OrganizationStatus, OrganizationType};
use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationSeed {
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: OrganizationType,
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: String,
    pub phone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub area: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default = "default_country")]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Seeded organizations are usually pre-verified.
    #[serde(default = "default_seed_status")]
    pub status: OrganizationStatus,
}

fn default_country() -> String {
    "India".to_string()
}

fn default_seed_status() -> OrganizationStatus {
    OrganizationStatus::Active
}

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub organizations: Vec<OrganizationSeed>,
}

/// Load and validate the organization seed file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_organization_seeds(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_seed_file(&content)
}

/// Parse and validate seed YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError::SeedFileParse` on malformed YAML and
/// `ConfigError::Validation` when an entry is unusable.
pub fn parse_seed_file(content: &str) -> Result<SeedFile, ConfigError> {
    let seed_file: SeedFile = serde_yaml::from_str(content).map_err(ConfigError::SeedFileParse)?;
    validate_seeds(&seed_file)?;
    Ok(seed_file)
}

fn validate_seeds(seed_file: &SeedFile) -> Result<(), ConfigError> {
    let mut seen_owners = HashSet::new();

    for org in &seed_file.organizations {
        if org.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "organization name must be non-empty".to_string(),
            ));
        }

        let owner = org.owner_id.trim();
        if owner.is_empty() {
            return Err(ConfigError::Validation(format!(
                "organization '{}' has an empty owner_id",
                org.name
            )));
        }
        if !seen_owners.insert(owner.to_string()) {
            return Err(ConfigError::Validation(format!(
                "duplicate owner_id: '{owner}' (from organization '{}')",
                org.name
            )));
        }

        if !is_valid_coordinates(org.latitude, org.longitude) {
            return Err(ConfigError::Validation(format!(
                "organization '{}' has invalid coordinates ({}, {})",
                org.name, org.latitude, org.longitude
            )));
        }
    }

    Ok(())
}
