//! Read operations for the `organizations` table.

use futures::future::try_join_all;
use ngodir_core::OrganizationStatus;
use sqlx::PgPool;
use uuid::Uuid;

use super::types::{OrganizationRow, ORGANIZATION_COLUMNS};

/// Cities shown on the landing page, in display order.
pub const DEFAULT_FEATURED_CITIES: [&str; 4] = ["jaipur", "delhi", "mumbai", "bangalore"];
pub const DEFAULT_FEATURED_PER_CITY: i64 = 3;

/// Fetch a single organization by its public UUID.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn get_organization_by_public_id(
    pool: &PgPool,
    public_id: Uuid,
) -> Result<Option<OrganizationRow>, sqlx::Error> {
    let sql = format!("SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE public_id = $1");
    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(public_id)
        .fetch_optional(pool)
        .await
}

/// Fetch the organization owned by `owner_id`, if any.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn get_organization_by_owner(
    pool: &PgPool,
    owner_id: &str,
) -> Result<Option<OrganizationRow>, sqlx::Error> {
    let sql = format!("SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE owner_id = $1");
    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(owner_id)
        .fetch_optional(pool)
        .await
}

/// Whether `owner_id` already has an organization registered.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn owner_has_organization(pool: &PgPool, owner_id: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM organizations WHERE owner_id = $1)")
        .bind(owner_id)
        .fetch_one(pool)
        .await
}

/// Organizations whose city equals `city`, compared case-insensitively.
///
/// Ordered by `id ASC`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_organizations_by_city(
    pool: &PgPool,
    city: &str,
) -> Result<Vec<OrganizationRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {ORGANIZATION_COLUMNS} FROM organizations \
         WHERE LOWER(city) = LOWER($1) \
         ORDER BY id ASC"
    );
    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(city.trim())
        .fetch_all(pool)
        .await
}

/// Organizations whose state equals `state`, compared case-insensitively.
///
/// Ordered by `id ASC`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_organizations_by_state(
    pool: &PgPool,
    state: &str,
) -> Result<Vec<OrganizationRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {ORGANIZATION_COLUMNS} FROM organizations \
         WHERE LOWER(state) = LOWER($1) \
         ORDER BY id ASC"
    );
    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(state.trim())
        .fetch_all(pool)
        .await
}

/// Organizations whose latitude lies in `[south, north]` (inclusive).
///
/// This is only the datastore half of a bounding-box lookup: longitude is
/// not filtered here, so callers must post-filter the returned band.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_organizations_in_latitude_range(
    pool: &PgPool,
    south: f64,
    north: f64,
) -> Result<Vec<OrganizationRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {ORGANIZATION_COLUMNS} FROM organizations \
         WHERE latitude >= $1 AND latitude <= $2 \
         ORDER BY id ASC"
    );
    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(south)
        .bind(north)
        .fetch_all(pool)
        .await
}

/// Up to `per_city` organizations for each city, concatenated in city order.
///
/// One query per city, issued concurrently.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if any of the per-city queries fails.
pub async fn list_featured_organizations(
    pool: &PgPool,
    cities: &[&str],
    per_city: i64,
) -> Result<Vec<OrganizationRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {ORGANIZATION_COLUMNS} FROM organizations \
         WHERE LOWER(city) = LOWER($1) \
         ORDER BY id ASC \
         LIMIT $2"
    );
    let per_city_rows = try_join_all(cities.iter().map(|city| {
        sqlx::query_as::<_, OrganizationRow>(&sql)
            .bind(*city)
            .bind(per_city)
            .fetch_all(pool)
    }))
    .await?;

    Ok(per_city_rows.into_iter().flatten().collect())
}

/// Organizations in a given status, newest first. Drives the admin
/// verification queue.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_organizations_by_status(
    pool: &PgPool,
    status: OrganizationStatus,
) -> Result<Vec<OrganizationRow>, sqlx::Error> {
    let sql = format!(
        "SELECT {ORGANIZATION_COLUMNS} FROM organizations \
         WHERE status = $1 \
         ORDER BY created_at DESC, id DESC"
    );
    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(status.as_str())
        .fetch_all(pool)
        .await
}
