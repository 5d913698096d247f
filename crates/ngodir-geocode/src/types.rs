use serde::{Deserialize, Serialize};

/// A geocoded address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: String,
    pub place_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseGeocodeResult {
    pub formatted_address: String,
    pub address_components: Vec<AddressComponent>,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ForwardResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default, rename = "geocodingResults")]
    pub geocoding_results: Vec<ForwardItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForwardItem {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub place_id: String,
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReverseResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub results: Vec<ReverseItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReverseItem {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

impl From<ForwardItem> for GeocodeResult {
    fn from(item: ForwardItem) -> Self {
        Self {
            lat: item.geometry.location.lat,
            lng: item.geometry.location.lng,
            formatted_address: item.formatted_address,
            place_id: item.place_id,
        }
    }
}

impl From<ReverseItem> for ReverseGeocodeResult {
    fn from(item: ReverseItem) -> Self {
        Self {
            formatted_address: item.formatted_address,
            address_components: item.address_components,
        }
    }
}
