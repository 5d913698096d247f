use ngodir_core::{searchable_keywords, slug_from_name, OrganizationSeed};
use sqlx::PgPool;

use crate::DbError;

/// Upsert organizations from the seed file, keyed on `owner_id`.
///
/// Returns the number of organizations processed (inserted or updated).
/// All upserts run inside a single transaction; if any operation fails
/// the entire batch is rolled back. Seeds in `active` status get
/// `published_at` stamped the first time they are activated.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_organizations(
    pool: &PgPool,
    organizations: &[OrganizationSeed],
) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for org in organizations {
        let slug = slug_from_name(&org.name);
        let keywords = searchable_keywords(&org.name, &org.city, org.org_type, &org.area);

        sqlx::query(
            "INSERT INTO organizations \
                 (owner_id, name, slug, org_type, tagline, description, phone, email, \
                  street, area, city, state, pincode, country, latitude, longitude, \
                  status, searchable_keywords, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
                     $17, $18, CASE WHEN $17 = 'active' THEN NOW() END) \
             ON CONFLICT (owner_id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 slug = EXCLUDED.slug, \
                 org_type = EXCLUDED.org_type, \
                 tagline = EXCLUDED.tagline, \
                 description = EXCLUDED.description, \
                 phone = EXCLUDED.phone, \
                 email = EXCLUDED.email, \
                 street = EXCLUDED.street, \
                 area = EXCLUDED.area, \
                 city = EXCLUDED.city, \
                 state = EXCLUDED.state, \
                 pincode = EXCLUDED.pincode, \
                 country = EXCLUDED.country, \
                 latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 status = EXCLUDED.status, \
                 searchable_keywords = EXCLUDED.searchable_keywords, \
                 published_at = COALESCE(organizations.published_at, EXCLUDED.published_at), \
                 updated_at = NOW()",
        )
        .bind(&org.owner_id)
        .bind(&org.name)
        .bind(&slug)
        .bind(org.org_type.as_str())
        .bind(&org.tagline)
        .bind(&org.description)
        .bind(&org.phone)
        .bind(&org.email)
        .bind(&org.street)
        .bind(&org.area)
        .bind(&org.city)
        .bind(&org.state)
        .bind(&org.pincode)
        .bind(&org.country)
        .bind(org.latitude)
        .bind(org.longitude)
        .bind(org.status.as_str())
        .bind(&keywords)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}
