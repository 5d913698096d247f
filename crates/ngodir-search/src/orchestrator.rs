//! Smart location search.
//!
//! A query that looks like a city or state name is first tried as an exact
//! city/state match. If the classifier says it is a full address, or the
//! exact match finds nothing, the query is geocoded and organizations are
//! ranked by great-circle distance from that point.

use std::collections::HashSet;

use ngodir_core::{format_distance, normalize_query, BoundingBox, GeoPoint, Organization, QueryClassifier};

use crate::error::SearchError;
use crate::result::{RankedOrganization, SearchKind, SearchResult};
use crate::source::{Geocoder, OrganizationSource, SourceError};

pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Run a smart search for `query` within `radius_km` of the geocoded point.
///
/// Every call is independent: nothing is cached and no collaborator call is
/// retried here. A successful search with no matches returns an empty
/// `organizations` list; only collaborator failures are errors.
///
/// # Errors
///
/// - [`SearchError::InvalidRadius`] if `radius_km` is not a positive finite number.
/// - [`SearchError::Datastore`] if any organization lookup fails.
/// - [`SearchError::Geocode`] if the address cannot be geocoded.
pub async fn smart_search_organizations<S, G>(
    source: &S,
    geocoder: &G,
    classifier: &QueryClassifier,
    query: &str,
    radius_km: f64,
) -> Result<SearchResult, SearchError>
where
    S: OrganizationSource,
    G: Geocoder,
{
    if !(radius_km.is_finite() && radius_km > 0.0) {
        return Err(SearchError::InvalidRadius(radius_km));
    }

    if classifier.is_simple_location(query) {
        let normalized = normalize_query(query);
        let organizations = find_by_city_or_state(source, &normalized)
            .await
            .map_err(datastore_failure)?;

        if !organizations.is_empty() {
            tracing::debug!(
                query = %normalized,
                count = organizations.len(),
                "city/state match"
            );
            return Ok(SearchResult::city_state(organizations));
        }
        tracing::debug!(query = %normalized, "no city/state match, geocoding query");
    }

    let location = geocoder.forward(query).await.map_err(|e| {
        tracing::error!(error = %e, query, "search geocoding failed");
        SearchError::Geocode(e)
    })?;

    let center = GeoPoint::new(location.lat, location.lng);
    let bounding_box = BoundingBox::around(center, radius_km);
    let candidates = find_in_bounding_box(source, &bounding_box)
        .await
        .map_err(datastore_failure)?;
    let organizations = rank_by_distance(candidates, &center, radius_km);

    tracing::debug!(
        query,
        lat = location.lat,
        lng = location.lng,
        radius_km,
        count = organizations.len(),
        "address search"
    );

    Ok(SearchResult {
        kind: SearchKind::Address,
        organizations,
        search_location: Some(location),
        bounding_box: Some(bounding_box),
    })
}

/// City matches followed by state matches, with records present in both
/// kept once at their city position. Both lookups run concurrently.
///
/// # Errors
///
/// Returns the first lookup failure.
pub async fn find_by_city_or_state<S: OrganizationSource>(
    source: &S,
    normalized_query: &str,
) -> Result<Vec<Organization>, SourceError> {
    let (by_city, by_state) = tokio::try_join!(
        source.find_by_city(normalized_query),
        source.find_by_state(normalized_query)
    )?;
    Ok(merge_unique(by_city, by_state))
}

/// Organizations inside `bounding_box`: a latitude-range lookup in the
/// datastore, then a longitude filter applied here. The longitude filter is
/// what turns the latitude band into a box.
///
/// # Errors
///
/// Returns the lookup failure.
pub async fn find_in_bounding_box<S: OrganizationSource>(
    source: &S,
    bounding_box: &BoundingBox,
) -> Result<Vec<Organization>, SourceError> {
    let band = source
        .find_in_latitude_range(bounding_box.southwest.lat, bounding_box.northeast.lat)
        .await?;
    Ok(band
        .into_iter()
        .filter(|org| bounding_box.contains_longitude(org.location.longitude))
        .collect())
}

fn merge_unique(first: Vec<Organization>, second: Vec<Organization>) -> Vec<Organization> {
    let mut seen = HashSet::with_capacity(first.len() + second.len());
    first
        .into_iter()
        .chain(second)
        .filter(|org| seen.insert(org.id))
        .collect()
}

/// Attach distances, drop anything beyond `radius_km`, and sort nearest
/// first. Equal distances keep their candidate order.
fn rank_by_distance(
    candidates: Vec<Organization>,
    center: &GeoPoint,
    radius_km: f64,
) -> Vec<RankedOrganization> {
    let mut ranked: Vec<RankedOrganization> = candidates
        .into_iter()
        .filter_map(|organization| {
            let distance = center.distance_km(&GeoPoint::new(
                organization.location.latitude,
                organization.location.longitude,
            ));
            (distance <= radius_km).then(|| RankedOrganization {
                organization,
                distance: Some(distance),
                distance_formatted: Some(format_distance(distance)),
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .unwrap_or_default()
            .total_cmp(&b.distance.unwrap_or_default())
    });
    ranked
}

fn datastore_failure(err: SourceError) -> SearchError {
    tracing::error!(error = %err, "search datastore lookup failed");
    SearchError::Datastore(err)
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
