//! Row and input types for the `organizations` table.

use chrono::{DateTime, Utc};
use ngodir_core::{
    Address, Contact, CoreError, Location, Organization, OrganizationStatus, OrganizationType,
    VerificationBadge,
};
use uuid::Uuid;

use crate::non_blank;

/// Column list shared by every query that reads back a full [`OrganizationRow`].
pub(crate) const ORGANIZATION_COLUMNS: &str = "id, public_id, owner_id, name, slug, org_type, \
     tagline, description, phone, alternate_phone, email, website, facebook, instagram, twitter, \
     street, area, city, state, pincode, country, latitude, longitude, place_id, \
     formatted_address, logo_url, status, verification_badge, suspension_reason, verified_by, \
     last_verified_at, searchable_keywords, created_at, updated_at, published_at";

/// A row from the `organizations` table.
///
/// Enum-valued columns are kept as text; convert with
/// [`Organization::try_from`] to get the typed domain value.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrganizationRow {
    pub id: i64,
    pub public_id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub slug: String,
    pub org_type: String,
    pub tagline: Option<String>,
    pub description: String,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub street: String,
    pub area: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub logo_url: Option<String>,
    pub status: String,
    pub verification_badge: Option<String>,
    pub suspension_reason: Option<String>,
    pub verified_by: Option<String>,
    pub last_verified_at: Option<DateTime<Utc>>,
    pub searchable_keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl TryFrom<OrganizationRow> for Organization {
    type Error = CoreError;

    fn try_from(row: OrganizationRow) -> Result<Self, Self::Error> {
        let org_type: OrganizationType = row.org_type.parse()?;
        let status: OrganizationStatus = row.status.parse()?;
        let verification_badge = row
            .verification_badge
            .as_deref()
            .map(str::parse::<VerificationBadge>)
            .transpose()?;

        Ok(Organization {
            id: row.id,
            public_id: row.public_id,
            owner_id: row.owner_id,
            name: row.name,
            slug: row.slug,
            org_type,
            tagline: row.tagline,
            description: row.description,
            contact: Contact {
                phone: row.phone,
                alternate_phone: row.alternate_phone,
                email: row.email,
                website: row.website,
                facebook: row.facebook,
                instagram: row.instagram,
                twitter: row.twitter,
            },
            address: Address {
                street: row.street,
                area: row.area,
                city: row.city,
                state: row.state,
                pincode: row.pincode,
                country: row.country,
            },
            location: Location {
                latitude: row.latitude,
                longitude: row.longitude,
                place_id: row.place_id,
                formatted_address: row.formatted_address,
            },
            logo_url: row.logo_url,
            status,
            verification_badge,
            suspension_reason: row.suspension_reason,
            verified_by: row.verified_by,
            last_verified_at: row.last_verified_at,
            searchable_keywords: row.searchable_keywords,
            created_at: row.created_at,
            updated_at: row.updated_at,
            published_at: row.published_at,
        })
    }
}

/// Input for onboarding a new organization.
#[derive(Debug, Clone)]
pub struct NewOrganization {
    pub owner_id: String,
    pub name: String,
    pub org_type: OrganizationType,
    pub tagline: Option<String>,
    pub description: String,
    pub contact: Contact,
    pub address: Address,
    pub location: Location,
    pub logo_url: Option<String>,
}

/// Sparse update for an existing organization. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct OrganizationPatch {
    pub name: Option<String>,
    pub org_type: Option<OrganizationType>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub street: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub logo_url: Option<String>,
}

impl OrganizationPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.org_type.is_none()
            && self.tagline.is_none()
            && self.description.is_none()
            && self.phone.is_none()
            && self.alternate_phone.is_none()
            && self.email.is_none()
            && self.website.is_none()
            && self.facebook.is_none()
            && self.instagram.is_none()
            && self.twitter.is_none()
            && self.street.is_none()
            && self.area.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.pincode.is_none()
            && self.country.is_none()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.place_id.is_none()
            && self.formatted_address.is_none()
            && self.logo_url.is_none()
    }

    /// Apply the patch onto an existing organization, trimming text values.
    pub(crate) fn apply_to(self, org: &mut Organization) {
        fn set(target: &mut String, value: Option<String>) {
            if let Some(v) = value {
                *target = v.trim().to_string();
            }
        }
        fn set_opt(target: &mut Option<String>, value: Option<String>) {
            if let Some(v) = value {
                *target = non_blank(&v);
            }
        }

        set(&mut org.name, self.name);
        if let Some(t) = self.org_type {
            org.org_type = t;
        }
        set_opt(&mut org.tagline, self.tagline);
        set(&mut org.description, self.description);
        set(&mut org.contact.phone, self.phone);
        set_opt(&mut org.contact.alternate_phone, self.alternate_phone);
        set_opt(&mut org.contact.email, self.email);
        set_opt(&mut org.contact.website, self.website);
        set_opt(&mut org.contact.facebook, self.facebook);
        set_opt(&mut org.contact.instagram, self.instagram);
        set_opt(&mut org.contact.twitter, self.twitter);
        set(&mut org.address.street, self.street);
        set(&mut org.address.area, self.area);
        set(&mut org.address.city, self.city);
        set(&mut org.address.state, self.state);
        set(&mut org.address.pincode, self.pincode);
        set(&mut org.address.country, self.country);
        if let Some(lat) = self.latitude {
            org.location.latitude = lat;
        }
        if let Some(lng) = self.longitude {
            org.location.longitude = lng;
        }
        set_opt(&mut org.location.place_id, self.place_id);
        set_opt(&mut org.location.formatted_address, self.formatted_address);
        set_opt(&mut org.logo_url, self.logo_url);
    }
}

/// Admin decision applied by [`crate::set_organization_status`].
#[derive(Debug, Clone)]
pub struct StatusChange {
    pub status: OrganizationStatus,
    /// Badge granted on activation; defaults to `verified` when absent.
    pub badge: Option<VerificationBadge>,
    /// Required when suspending.
    pub reason: Option<String>,
    pub verified_by: Option<String>,
}
