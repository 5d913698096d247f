//! Database operations for the `organizations` table.

mod read;
mod types;
mod write;

pub use read::{
    get_organization_by_owner, get_organization_by_public_id, list_featured_organizations,
    list_organizations_by_city, list_organizations_by_state, list_organizations_by_status,
    list_organizations_in_latitude_range, owner_has_organization, DEFAULT_FEATURED_CITIES,
    DEFAULT_FEATURED_PER_CITY,
};
pub use types::{NewOrganization, OrganizationPatch, OrganizationRow, StatusChange};
pub use write::{create_organization, set_organization_status, update_organization};
