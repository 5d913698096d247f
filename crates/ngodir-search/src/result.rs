use ngodir_core::{BoundingBox, Organization};
use ngodir_geocode::GeocodeResult;
use serde::Serialize;

/// Which path produced a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Exact city/state match; no distances.
    CityState,
    /// Geocoded point plus radius; results carry distances.
    Address,
}

/// An organization as returned by search. Distance fields are only set on
/// the address path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOrganization {
    #[serde(flatten)]
    pub organization: Organization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_formatted: Option<String>,
}

impl From<Organization> for RankedOrganization {
    fn from(organization: Organization) -> Self {
        Self {
            organization,
            distance: None,
            distance_formatted: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub organizations: Vec<RankedOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_location: Option<GeocodeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

impl SearchResult {
    pub(crate) fn city_state(organizations: Vec<Organization>) -> Self {
        Self {
            kind: SearchKind::CityState,
            organizations: organizations.into_iter().map(Into::into).collect(),
            search_location: None,
            bounding_box: None,
        }
    }
}
