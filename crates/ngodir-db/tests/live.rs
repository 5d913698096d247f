//! Live integration tests for ngodir-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/ngodir-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use ngodir_core::{
    parse_seed_file, Address, Contact, Location, OrganizationStatus, OrganizationType,
    VerificationBadge,
};
use ngodir_db::{
    create_organization, create_user_submission, get_organization_by_owner,
    get_organization_by_public_id, list_featured_organizations, list_organizations_by_city,
    list_organizations_by_state, list_organizations_by_status,
    list_organizations_in_latitude_range, list_user_submissions, mark_submission_registered,
    owner_has_organization, seed_organizations, set_organization_status, update_organization,
    DbError, NewOrganization, NewUserSubmission, OrganizationPatch, StatusChange,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_org(owner_id: &str, name: &str, city: &str, state: &str, lat: f64, lng: f64) -> NewOrganization {
    NewOrganization {
        owner_id: owner_id.to_string(),
        name: name.to_string(),
        org_type: OrganizationType::Ngo,
        tagline: None,
        description: format!("{name} serves {city}"),
        contact: Contact {
            phone: "+91 11 5550 0000".to_string(),
            ..Contact::default()
        },
        address: Address {
            street: "1 Main Road".to_string(),
            area: "Civil Lines".to_string(),
            city: city.to_string(),
            state: state.to_string(),
            pincode: "110001".to_string(),
            country: "India".to_string(),
        },
        location: Location {
            latitude: lat,
            longitude: lng,
            place_id: None,
            formatted_address: None,
        },
        logo_url: None,
    }
}

async fn insert(pool: &sqlx::PgPool, org: &NewOrganization) -> ngodir_db::OrganizationRow {
    create_organization(pool, org)
        .await
        .unwrap_or_else(|e| panic!("create_organization failed for '{}': {e}", org.owner_id))
}

// ---------------------------------------------------------------------------
// Section 1: Onboarding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_organization_starts_pending_with_derived_fields(pool: sqlx::PgPool) {
    let mut org = new_org("owner-1", "  Helping Hands  ", "Jaipur", "Rajasthan", 26.85, 75.82);
    org.address.area = "Malviya Nagar".to_string();

    let row = insert(&pool, &org).await;

    assert_eq!(row.name, "Helping Hands");
    assert_eq!(row.slug, "helping-hands");
    assert_eq!(row.status, "pending_verification");
    assert!(row.published_at.is_none());
    assert_eq!(
        row.searchable_keywords,
        vec!["helping hands", "jaipur", "ngo", "malviya nagar", "helping", "hands"]
    );

    let fetched = get_organization_by_public_id(&pool, row.public_id)
        .await
        .expect("get_organization_by_public_id failed")
        .expect("row should exist");
    assert_eq!(fetched.id, row.id);

    let by_owner = get_organization_by_owner(&pool, "owner-1")
        .await
        .expect("get_organization_by_owner failed");
    assert_eq!(by_owner.map(|r| r.id), Some(row.id));
    assert!(owner_has_organization(&pool, "owner-1").await.unwrap());
    assert!(!owner_has_organization(&pool, "owner-2").await.unwrap());
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_organization_rejects_duplicate_owner(pool: sqlx::PgPool) {
    insert(&pool, &new_org("owner-1", "First", "Delhi", "Delhi", 28.61, 77.20)).await;

    let err = create_organization(&pool, &new_org("owner-1", "Second", "Delhi", "Delhi", 28.62, 77.21))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Conflict(_)), "got {err:?}");
}

#[sqlx::test(migrations = "../../migrations")]
async fn create_organization_rejects_unset_coordinates(pool: sqlx::PgPool) {
    let err = create_organization(&pool, &new_org("owner-1", "Nowhere", "Delhi", "Delhi", 0.0, 0.0))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Validation(_)), "got {err:?}");
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_organization_patches_and_regenerates_keywords(pool: sqlx::PgPool) {
    let row = insert(&pool, &new_org("owner-1", "Seva", "Jaipur", "Rajasthan", 26.9, 75.8)).await;

    let patch = OrganizationPatch {
        name: Some("Seva Sadan".to_string()),
        city: Some("Ajmer".to_string()),
        website: Some("https://seva.example.org".to_string()),
        ..OrganizationPatch::default()
    };
    let updated = update_organization(&pool, row.public_id, patch)
        .await
        .expect("update_organization failed");

    assert_eq!(updated.name, "Seva Sadan");
    assert_eq!(updated.slug, "seva-sadan");
    assert_eq!(updated.city, "Ajmer");
    assert_eq!(updated.state, "Rajasthan", "unpatched field must be kept");
    assert_eq!(updated.website.as_deref(), Some("https://seva.example.org"));
    assert!(updated.searchable_keywords.contains(&"ajmer".to_string()));
    assert!(!updated.searchable_keywords.contains(&"jaipur".to_string()));
    assert!(updated.updated_at >= row.updated_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_unknown_organization_is_not_found(pool: sqlx::PgPool) {
    let err = update_organization(&pool, uuid::Uuid::new_v4(), OrganizationPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound));
}

// ---------------------------------------------------------------------------
// Section 2: Search lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn city_and_state_lookups_are_case_insensitive(pool: sqlx::PgPool) {
    insert(&pool, &new_org("a", "A", "Jaipur", "Rajasthan", 26.91, 75.78)).await;
    insert(&pool, &new_org("b", "B", "JAIPUR", "Rajasthan", 26.92, 75.79)).await;
    insert(&pool, &new_org("c", "C", "Udaipur", "Rajasthan", 24.58, 73.71)).await;
    insert(&pool, &new_org("d", "D", "Delhi", "Delhi", 28.61, 77.20)).await;

    let by_city = list_organizations_by_city(&pool, "jaipur").await.unwrap();
    assert_eq!(by_city.len(), 2);

    let by_state = list_organizations_by_state(&pool, "rajasthan").await.unwrap();
    assert_eq!(by_state.len(), 3);

    let none = list_organizations_by_city(&pool, "atlantis").await.unwrap();
    assert!(none.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn latitude_range_ignores_longitude(pool: sqlx::PgPool) {
    insert(&pool, &new_org("near", "Near", "Jaipur", "Rajasthan", 26.91, 75.78)).await;
    // Same latitude band, far to the west.
    insert(&pool, &new_org("west", "West", "Jodhpur", "Rajasthan", 26.90, 70.00)).await;
    insert(&pool, &new_org("north", "North", "Delhi", "Delhi", 28.61, 77.20)).await;

    let rows = list_organizations_in_latitude_range(&pool, 26.8, 27.0)
        .await
        .unwrap();
    let owners: Vec<&str> = rows.iter().map(|r| r.owner_id.as_str()).collect();
    assert_eq!(owners, vec!["near", "west"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn featured_organizations_are_capped_per_city_in_city_order(pool: sqlx::PgPool) {
    for i in 0..4 {
        insert(
            &pool,
            &new_org(&format!("j{i}"), &format!("Jaipur Org {i}"), "Jaipur", "Rajasthan", 26.9, 75.8),
        )
        .await;
    }
    insert(&pool, &new_org("d0", "Delhi Org", "Delhi", "Delhi", 28.61, 77.20)).await;

    let rows = list_featured_organizations(&pool, &["delhi", "jaipur", "mumbai"], 3)
        .await
        .unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].city, "Delhi");
    assert!(rows[1..].iter().all(|r| r.city == "Jaipur"));
}

// ---------------------------------------------------------------------------
// Section 3: Verification workflow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn activation_stamps_verification_fields_once(pool: sqlx::PgPool) {
    let row = insert(&pool, &new_org("owner-1", "Seva", "Jaipur", "Rajasthan", 26.9, 75.8)).await;

    let pending = list_organizations_by_status(&pool, OrganizationStatus::PendingVerification)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);

    let change = StatusChange {
        status: OrganizationStatus::Active,
        badge: None,
        reason: None,
        verified_by: Some("admin@ngodir".to_string()),
    };
    let active = set_organization_status(&pool, row.public_id, &change)
        .await
        .expect("activation failed");

    assert_eq!(active.status, "active");
    assert_eq!(active.verification_badge.as_deref(), Some("verified"));
    assert_eq!(active.verified_by.as_deref(), Some("admin@ngodir"));
    assert!(active.last_verified_at.is_some());
    let first_published = active.published_at.expect("published_at set on activation");

    let reactivated = set_organization_status(
        &pool,
        row.public_id,
        &StatusChange {
            badge: Some(VerificationBadge::Premium),
            ..change
        },
    )
    .await
    .unwrap();
    assert_eq!(reactivated.published_at, Some(first_published));
    assert_eq!(reactivated.verification_badge.as_deref(), Some("premium"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn suspension_requires_reason(pool: sqlx::PgPool) {
    let row = insert(&pool, &new_org("owner-1", "Seva", "Jaipur", "Rajasthan", 26.9, 75.8)).await;

    let mut change = StatusChange {
        status: OrganizationStatus::Suspended,
        badge: None,
        reason: Some("   ".to_string()),
        verified_by: None,
    };
    let err = set_organization_status(&pool, row.public_id, &change)
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::Validation(_)));

    change.reason = Some("Reported fraudulent listing".to_string());
    let suspended = set_organization_status(&pool, row.public_id, &change)
        .await
        .unwrap();
    assert_eq!(suspended.status, "suspended");
    assert_eq!(
        suspended.suspension_reason.as_deref(),
        Some("Reported fraudulent listing")
    );

    let inactive = set_organization_status(
        &pool,
        row.public_id,
        &StatusChange {
            status: OrganizationStatus::Inactive,
            badge: None,
            reason: None,
            verified_by: None,
        },
    )
    .await
    .unwrap();
    assert!(inactive.suspension_reason.is_none());
}

// ---------------------------------------------------------------------------
// Section 4: Submissions and seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn submission_lifecycle(pool: sqlx::PgPool) {
    let created = create_user_submission(
        &pool,
        &NewUserSubmission {
            user_name: "Asha".to_string(),
            ngo_name: "Seva Trust".to_string(),
            ngo_address: "Sector 5, Jaipur".to_string(),
            ngo_email: Some(String::new()),
            ..NewUserSubmission::default()
        },
    )
    .await
    .expect("create_user_submission failed");

    assert!(!created.ngo_registered);
    assert!(created.ngo_email.is_none(), "blank optional fields are stored as NULL");

    let registered = mark_submission_registered(&pool, created.public_id)
        .await
        .unwrap();
    assert!(registered.ngo_registered);

    let all = list_user_submissions(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    let err = mark_submission_registered(&pool, uuid::Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::NotFound));
}

#[sqlx::test(migrations = "../../migrations")]
async fn seed_is_idempotent(pool: sqlx::PgPool) {
    let file = parse_seed_file(
        r"
organizations:
  - owner_id: seed-1
    name: Helping Hands
    type: orphanage
    description: Shelter
    phone: '+91 141 555 0101'
    street: 12 Tonk Road
    area: Malviya Nagar
    city: Jaipur
    state: Rajasthan
    pincode: '302017'
    latitude: 26.8549
    longitude: 75.8243
",
    )
    .expect("seed parses");

    assert_eq!(seed_organizations(&pool, &file.organizations).await.unwrap(), 1);
    assert_eq!(seed_organizations(&pool, &file.organizations).await.unwrap(), 1);

    let rows = list_organizations_by_city(&pool, "jaipur").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "active");
    assert!(rows[0].published_at.is_some());
}
