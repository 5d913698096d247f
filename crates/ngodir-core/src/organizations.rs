use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    Ngo,
    Orphanage,
    SeniorCentre,
    AnimalShelter,
    Educational,
    Healthcare,
    Other,
}

impl OrganizationType {
    pub const ALL: [OrganizationType; 7] = [
        OrganizationType::Ngo,
        OrganizationType::Orphanage,
        OrganizationType::SeniorCentre,
        OrganizationType::AnimalShelter,
        OrganizationType::Educational,
        OrganizationType::Healthcare,
        OrganizationType::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrganizationType::Ngo => "ngo",
            OrganizationType::Orphanage => "orphanage",
            OrganizationType::SeniorCentre => "senior_centre",
            OrganizationType::AnimalShelter => "animal_shelter",
            OrganizationType::Educational => "educational",
            OrganizationType::Healthcare => "healthcare",
            OrganizationType::Other => "other",
        }
    }

    /// Human-readable label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OrganizationType::Ngo => "NGO",
            OrganizationType::Orphanage => "Orphanage",
            OrganizationType::SeniorCentre => "Senior Care Centre",
            OrganizationType::AnimalShelter => "Animal Shelter",
            OrganizationType::Educational => "Educational Institution",
            OrganizationType::Healthcare => "Healthcare Facility",
            OrganizationType::Other => "Other",
        }
    }
}

impl std::fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::InvalidOrganizationType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStatus {
    PendingVerification,
    Active,
    Inactive,
    Suspended,
}

impl OrganizationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrganizationStatus::PendingVerification => "pending_verification",
            OrganizationStatus::Active => "active",
            OrganizationStatus::Inactive => "inactive",
            OrganizationStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrganizationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_verification" => Ok(OrganizationStatus::PendingVerification),
            "active" => Ok(OrganizationStatus::Active),
            "inactive" => Ok(OrganizationStatus::Inactive),
            "suspended" => Ok(OrganizationStatus::Suspended),
            other => Err(CoreError::InvalidOrganizationStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationBadge {
    Basic,
    Verified,
    Premium,
}

impl VerificationBadge {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VerificationBadge::Basic => "basic",
            VerificationBadge::Verified => "verified",
            VerificationBadge::Premium => "premium",
        }
    }
}

impl FromStr for VerificationBadge {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(VerificationBadge::Basic),
            "verified" => Ok(VerificationBadge::Verified),
            "premium" => Ok(VerificationBadge::Premium),
            other => Err(CoreError::InvalidVerificationBadge(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub area: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
}

/// A directory entry for one non-profit.
///
/// `id` is the store's record identity; `public_id` is what the API exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub public_id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub slug: String,
    pub org_type: OrganizationType,
    pub tagline: Option<String>,
    pub description: String,
    pub contact: Contact,
    pub address: Address,
    pub location: Location,
    pub logo_url: Option<String>,
    pub status: OrganizationStatus,
    pub verification_badge: Option<VerificationBadge>,
    pub suspension_reason: Option<String>,
    pub verified_by: Option<String>,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub searchable_keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// A member of the public suggesting an organization that is not yet listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubmission {
    pub public_id: Uuid,
    pub user_name: String,
    pub user_email: Option<String>,
    pub ngo_name: String,
    pub ngo_email: Option<String>,
    pub ngo_phone_number: Option<String>,
    pub ngo_address: String,
    pub ngo_type: Option<String>,
    pub ngo_registered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Generate a URL-safe slug: lowercase, every run of characters outside
/// `[a-z0-9]` collapsed to one `-`, no leading or trailing `-`.
#[must_use]
pub fn slug_from_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Keywords stored alongside an organization for prefix/keyword lookup.
///
/// Order: full name, city, type, area, then each word of the name. Blank
/// entries are dropped; duplicates are kept.
#[must_use]
pub fn searchable_keywords(
    name: &str,
    city: &str,
    org_type: OrganizationType,
    area: &str,
) -> Vec<String> {
    let name_lc = name.to_lowercase();
    let mut keywords = vec![
        name_lc.clone(),
        city.to_lowercase(),
        org_type.as_str().to_string(),
        area.to_lowercase(),
    ];
    keywords.extend(name_lc.split(' ').map(str::to_string));
    keywords.retain(|k| !k.is_empty());
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple_name() {
        assert_eq!(slug_from_name("Helping Hands"), "helping-hands");
    }

    #[test]
    fn slug_collapses_punctuation_and_trims_dashes() {
        assert_eq!(
            slug_from_name("  Seva Trust (Jaipur) -- Unit #2! "),
            "seva-trust-jaipur-unit-2"
        );
    }

    #[test]
    fn slug_drops_non_ascii() {
        assert_eq!(slug_from_name("Café Ängel"), "caf-ngel");
    }

    #[test]
    fn keywords_include_name_words_city_type_and_area() {
        let keywords = searchable_keywords(
            "Helping Hands",
            "Jaipur",
            OrganizationType::Orphanage,
            "Malviya Nagar",
        );
        assert_eq!(
            keywords,
            vec![
                "helping hands",
                "jaipur",
                "orphanage",
                "malviya nagar",
                "helping",
                "hands"
            ]
        );
    }

    #[test]
    fn keywords_drop_blank_entries() {
        let keywords = searchable_keywords("Seva", "", OrganizationType::Ngo, "");
        assert_eq!(keywords, vec!["seva", "ngo", "seva"]);
    }

    #[test]
    fn organization_type_round_trips_through_str() {
        for t in OrganizationType::ALL {
            assert_eq!(t.as_str().parse::<OrganizationType>().unwrap(), t);
        }
        assert!("charity".parse::<OrganizationType>().is_err());
    }

    #[test]
    fn organization_type_serializes_snake_case() {
        let json = serde_json::to_string(&OrganizationType::AnimalShelter).unwrap();
        assert_eq!(json, "\"animal_shelter\"");
        assert_eq!(OrganizationType::SeniorCentre.label(), "Senior Care Centre");
    }

    #[test]
    fn organization_status_parses_known_values() {
        assert_eq!(
            "pending_verification".parse::<OrganizationStatus>().unwrap(),
            OrganizationStatus::PendingVerification
        );
        assert_eq!(
            "suspended".parse::<OrganizationStatus>().unwrap(),
            OrganizationStatus::Suspended
        );
        assert!("deleted".parse::<OrganizationStatus>().is_err());
    }

    #[test]
    fn verification_badge_parses_known_values() {
        assert_eq!(
            "premium".parse::<VerificationBadge>().unwrap(),
            VerificationBadge::Premium
        );
        assert!("gold".parse::<VerificationBadge>().is_err());
    }
}
