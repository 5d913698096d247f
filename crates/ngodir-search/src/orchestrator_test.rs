use chrono::Utc;
use ngodir_core::{
    Address, Contact, Location, Organization, OrganizationStatus, OrganizationType,
};
use uuid::Uuid;

use super::*;

fn org(id: i64, lat: f64, lng: f64) -> Organization {
    Organization {
        id,
        public_id: Uuid::new_v4(),
        owner_id: format!("owner-{id}"),
        name: format!("Org {id}"),
        slug: format!("org-{id}"),
        org_type: OrganizationType::Ngo,
        tagline: None,
        description: String::new(),
        contact: Contact::default(),
        address: Address::default(),
        location: Location {
            latitude: lat,
            longitude: lng,
            place_id: None,
            formatted_address: None,
        },
        logo_url: None,
        status: OrganizationStatus::Active,
        verification_badge: None,
        suspension_reason: None,
        verified_by: None,
        last_verified_at: None,
        searchable_keywords: Vec::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        published_at: None,
    }
}

fn ids(orgs: &[Organization]) -> Vec<i64> {
    orgs.iter().map(|o| o.id).collect()
}

#[test]
fn merge_keeps_city_results_first_and_drops_duplicates() {
    let city = vec![org(1, 28.6, 77.2), org(2, 28.6, 77.2)];
    let state = vec![org(2, 28.6, 77.2), org(3, 28.6, 77.2), org(1, 28.6, 77.2)];

    let merged = merge_unique(city, state);
    assert_eq!(ids(&merged), vec![1, 2, 3]);
}

#[test]
fn merge_of_empty_inputs_is_empty() {
    assert!(merge_unique(Vec::new(), Vec::new()).is_empty());
}

#[test]
fn rank_cuts_at_radius_and_sorts_nearest_first() {
    let center = GeoPoint::new(26.91, 75.78);
    let candidates = vec![
        org(1, 26.96, 75.78),  // ~5.6 km
        org(2, 26.91, 75.79),  // ~1.0 km
        org(3, 26.995, 75.875), // ~13.3 km
        org(4, 26.93, 75.80),  // ~3.0 km
    ];

    let ranked = rank_by_distance(candidates, &center, 10.0);
    let order: Vec<i64> = ranked.iter().map(|r| r.organization.id).collect();
    assert_eq!(order, vec![2, 4, 1]);

    let distances: Vec<f64> = ranked.iter().map(|r| r.distance.unwrap()).collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert!(distances.iter().all(|d| *d <= 10.0));
    assert_eq!(ranked[0].distance_formatted.as_deref(), Some("992 m"));
    assert_eq!(ranked[1].distance_formatted.as_deref(), Some("3.0 km"));
}

#[test]
fn rank_keeps_candidate_order_for_equal_distances() {
    let center = GeoPoint::new(26.91, 75.78);
    let candidates = vec![org(7, 26.92, 75.78), org(3, 26.92, 75.78), org(5, 26.92, 75.78)];

    let ranked = rank_by_distance(candidates, &center, 5.0);
    let order: Vec<i64> = ranked.iter().map(|r| r.organization.id).collect();
    assert_eq!(order, vec![7, 3, 5]);
}

#[test]
fn rank_includes_point_exactly_at_center() {
    let center = GeoPoint::new(26.91, 75.78);
    let ranked = rank_by_distance(vec![org(1, 26.91, 75.78)], &center, 0.5);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].distance, Some(0.0));
    assert_eq!(ranked[0].distance_formatted.as_deref(), Some("0 m"));
}
