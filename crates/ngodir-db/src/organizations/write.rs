//! Write operations for the `organizations` table.

use ngodir_core::{
    is_valid_coordinates, searchable_keywords, slug_from_name, Organization, OrganizationStatus,
};
use sqlx::PgPool;
use uuid::Uuid;

use super::types::{
    NewOrganization, OrganizationPatch, OrganizationRow, StatusChange, ORGANIZATION_COLUMNS,
};
use crate::{conflict_or_sqlx, non_blank, DbError};

/// Insert a new organization in `pending_verification` status.
///
/// Text fields are trimmed; the slug and searchable keywords are derived
/// from the name, city, type, and area.
///
/// # Errors
///
/// - [`DbError::Validation`] if the owner id, name, city or state is blank,
///   or the coordinates are invalid.
/// - [`DbError::Conflict`] if the owner already has an organization.
/// - [`DbError::Sqlx`] on any other database failure.
pub async fn create_organization(
    pool: &PgPool,
    new: &NewOrganization,
) -> Result<OrganizationRow, DbError> {
    let owner_id = required(&new.owner_id, "owner_id")?;
    let name = required(&new.name, "name")?;
    let city = required(&new.address.city, "city")?;
    let state = required(&new.address.state, "state")?;
    validate_coordinates(new.location.latitude, new.location.longitude)?;

    let area = new.address.area.trim();
    let slug = slug_from_name(&name);
    let keywords = searchable_keywords(&name, &city, new.org_type, area);
    let country = non_blank(&new.address.country).unwrap_or_else(|| "India".to_string());

    let sql = format!(
        "INSERT INTO organizations \
             (owner_id, name, slug, org_type, tagline, description, \
              phone, alternate_phone, email, website, facebook, instagram, twitter, \
              street, area, city, state, pincode, country, \
              latitude, longitude, place_id, formatted_address, logo_url, \
              searchable_keywords) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                 $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25) \
         RETURNING {ORGANIZATION_COLUMNS}"
    );

    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(&owner_id)
        .bind(&name)
        .bind(&slug)
        .bind(new.org_type.as_str())
        .bind(new.tagline.as_deref().and_then(non_blank))
        .bind(new.description.trim())
        .bind(new.contact.phone.trim())
        .bind(new.contact.alternate_phone.as_deref().and_then(non_blank))
        .bind(new.contact.email.as_deref().and_then(non_blank))
        .bind(new.contact.website.as_deref().and_then(non_blank))
        .bind(new.contact.facebook.as_deref().and_then(non_blank))
        .bind(new.contact.instagram.as_deref().and_then(non_blank))
        .bind(new.contact.twitter.as_deref().and_then(non_blank))
        .bind(new.address.street.trim())
        .bind(area)
        .bind(&city)
        .bind(&state)
        .bind(new.address.pincode.trim())
        .bind(&country)
        .bind(new.location.latitude)
        .bind(new.location.longitude)
        .bind(new.location.place_id.as_deref().and_then(non_blank))
        .bind(new.location.formatted_address.as_deref().and_then(non_blank))
        .bind(new.logo_url.as_deref().and_then(non_blank))
        .bind(&keywords)
        .fetch_one(pool)
        .await
        .map_err(|e| conflict_or_sqlx(e, "owner already has an organization"))
}

/// Apply a sparse patch to an organization and bump `updated_at`.
///
/// The slug and searchable keywords are recomputed from the patched values,
/// so they track any change to name, city, type, or area.
///
/// # Errors
///
/// - [`DbError::NotFound`] if no organization has `public_id`.
/// - [`DbError::Validation`] if the patch blanks a required field or
///   produces invalid coordinates.
/// - [`DbError::InvalidRow`] if the stored row holds an unknown enum value.
/// - [`DbError::Sqlx`] on any other database failure.
pub async fn update_organization(
    pool: &PgPool,
    public_id: Uuid,
    patch: OrganizationPatch,
) -> Result<OrganizationRow, DbError> {
    let mut tx = pool.begin().await?;

    let select = format!(
        "SELECT {ORGANIZATION_COLUMNS} FROM organizations WHERE public_id = $1 FOR UPDATE"
    );
    let row = sqlx::query_as::<_, OrganizationRow>(&select)
        .bind(public_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(DbError::NotFound)?;

    let mut org = Organization::try_from(row)?;
    patch.apply_to(&mut org);

    required(&org.name, "name")?;
    required(&org.address.city, "city")?;
    required(&org.address.state, "state")?;
    validate_coordinates(org.location.latitude, org.location.longitude)?;

    let slug = slug_from_name(&org.name);
    let keywords = searchable_keywords(
        &org.name,
        &org.address.city,
        org.org_type,
        &org.address.area,
    );

    let update = format!(
        "UPDATE organizations SET \
             name = $2, slug = $3, org_type = $4, tagline = $5, description = $6, \
             phone = $7, alternate_phone = $8, email = $9, website = $10, \
             facebook = $11, instagram = $12, twitter = $13, \
             street = $14, area = $15, city = $16, state = $17, pincode = $18, country = $19, \
             latitude = $20, longitude = $21, place_id = $22, formatted_address = $23, \
             logo_url = $24, searchable_keywords = $25, updated_at = NOW() \
         WHERE public_id = $1 \
         RETURNING {ORGANIZATION_COLUMNS}"
    );
    let updated = sqlx::query_as::<_, OrganizationRow>(&update)
        .bind(public_id)
        .bind(&org.name)
        .bind(&slug)
        .bind(org.org_type.as_str())
        .bind(&org.tagline)
        .bind(&org.description)
        .bind(&org.contact.phone)
        .bind(&org.contact.alternate_phone)
        .bind(&org.contact.email)
        .bind(&org.contact.website)
        .bind(&org.contact.facebook)
        .bind(&org.contact.instagram)
        .bind(&org.contact.twitter)
        .bind(&org.address.street)
        .bind(&org.address.area)
        .bind(&org.address.city)
        .bind(&org.address.state)
        .bind(&org.address.pincode)
        .bind(&org.address.country)
        .bind(org.location.latitude)
        .bind(org.location.longitude)
        .bind(&org.location.place_id)
        .bind(&org.location.formatted_address)
        .bind(&org.logo_url)
        .bind(&keywords)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(updated)
}

/// Move an organization through the verification workflow.
///
/// Activating stamps `verified_by` and `last_verified_at`, sets
/// `published_at` the first time only, and grants a badge (`verified` unless
/// another is given or one is already held). Suspending records the reason;
/// every other status clears it.
///
/// # Errors
///
/// - [`DbError::Validation`] if suspending without a reason.
/// - [`DbError::NotFound`] if no organization has `public_id`.
/// - [`DbError::Sqlx`] on any other database failure.
pub async fn set_organization_status(
    pool: &PgPool,
    public_id: Uuid,
    change: &StatusChange,
) -> Result<OrganizationRow, DbError> {
    let reason = change.reason.as_deref().and_then(non_blank);
    if change.status == OrganizationStatus::Suspended && reason.is_none() {
        return Err(DbError::Validation(
            "a reason is required to suspend an organization".to_string(),
        ));
    }

    let sql = format!(
        "UPDATE organizations SET \
             status = $2, \
             suspension_reason = CASE WHEN $2 = 'suspended' THEN $3::text ELSE NULL END, \
             verification_badge = CASE WHEN $2 = 'active' \
                 THEN COALESCE($4::text, verification_badge, 'verified') \
                 ELSE verification_badge END, \
             verified_by = CASE WHEN $2 = 'active' THEN $5::text ELSE verified_by END, \
             last_verified_at = CASE WHEN $2 = 'active' THEN NOW() ELSE last_verified_at END, \
             published_at = CASE WHEN $2 = 'active' \
                 THEN COALESCE(published_at, NOW()) \
                 ELSE published_at END, \
             updated_at = NOW() \
         WHERE public_id = $1 \
         RETURNING {ORGANIZATION_COLUMNS}"
    );

    sqlx::query_as::<_, OrganizationRow>(&sql)
        .bind(public_id)
        .bind(change.status.as_str())
        .bind(reason)
        .bind(change.badge.map(|b| b.as_str()))
        .bind(change.verified_by.as_deref().and_then(non_blank))
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)
}

fn required(value: &str, field: &str) -> Result<String, DbError> {
    non_blank(value).ok_or_else(|| DbError::Validation(format!("{field} must not be empty")))
}

fn validate_coordinates(lat: f64, lng: f64) -> Result<(), DbError> {
    if is_valid_coordinates(lat, lng) {
        Ok(())
    } else {
        Err(DbError::Validation(format!(
            "invalid coordinates ({lat}, {lng})"
        )))
    }
}
