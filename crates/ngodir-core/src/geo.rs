//! Great-circle geometry used by the location search.
//!
//! All functions take degrees and return kilometres. The bounding-box
//! approximation is only valid for small radii away from the poles; it does
//! not wrap across the antimeridian.

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[must_use]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_km(self.lat, self.lng, other.lat, other.lng)
    }
}

/// Axis-aligned lat/lng rectangle circumscribing a search circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub northeast: GeoPoint,
    pub southwest: GeoPoint,
    pub center: GeoPoint,
    #[serde(rename = "radius")]
    pub radius_km: f64,
}

impl BoundingBox {
    /// Compute the box around `center` that encloses every point within
    /// `radius_km` great-circle distance.
    ///
    /// Latitude span is exact (`radius / R` radians); longitude span is
    /// widened by `1 / cos(lat)` so the box never undercuts the circle.
    #[must_use]
    pub fn around(center: GeoPoint, radius_km: f64) -> Self {
        let angular_distance = radius_km / EARTH_RADIUS_KM;
        let lat_delta = angular_distance.to_degrees();
        let lng_delta = lat_delta / center.lat.to_radians().cos();

        Self {
            northeast: GeoPoint::new(center.lat + lat_delta, center.lng + lng_delta),
            southwest: GeoPoint::new(center.lat - lat_delta, center.lng - lng_delta),
            center,
            radius_km,
        }
    }

    #[must_use]
    pub fn contains_latitude(&self, lat: f64) -> bool {
        lat >= self.southwest.lat && lat <= self.northeast.lat
    }

    #[must_use]
    pub fn contains_longitude(&self, lng: f64) -> bool {
        lng >= self.southwest.lng && lng <= self.northeast.lng
    }

    #[must_use]
    pub fn contains(&self, point: &GeoPoint) -> bool {
        self.contains_latitude(point.lat) && self.contains_longitude(point.lng)
    }

    /// The four corners, clockwise from northeast.
    #[must_use]
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            self.northeast,
            GeoPoint::new(self.southwest.lat, self.northeast.lng),
            self.southwest,
            GeoPoint::new(self.northeast.lat, self.southwest.lng),
        ]
    }
}

/// Haversine great-circle distance in kilometres.
#[must_use]
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Render a distance for display: whole metres below 1 km, one decimal
/// place in kilometres otherwise.
#[must_use]
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        #[allow(clippy::cast_possible_truncation)]
        let meters = (distance_km * 1000.0).round() as i64;
        format!("{meters} m")
    } else {
        // Ties round away from zero, not to even.
        let km = (distance_km * 10.0).round() / 10.0;
        format!("{km:.1} km")
    }
}

/// Range check that also treats `0.0` on either axis as the unset sentinel.
///
/// This rejects the real point at the equator/prime-meridian intersection;
/// stored organizations default their coordinates to zero when unset.
#[must_use]
pub fn is_valid_coordinates(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) && lat != 0.0 && lng != 0.0
}
