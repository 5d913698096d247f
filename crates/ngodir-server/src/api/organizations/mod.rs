//! Organization handlers.
//!
//! - `GET   /api/v1/organizations/featured`          : featured listings per city
//! - `GET   /api/v1/organizations/{public_id}`       : single organization
//! - `POST  /api/v1/organizations`                   : onboarding (protected)
//! - `PATCH /api/v1/organizations/{public_id}`       : sparse profile update (protected)
//! - `PUT   /api/v1/organizations/{public_id}/status` : verification decision (protected)
//! - `GET   /api/v1/admin/organizations?status=`     : admin review queue (protected)
//! - `GET   /api/v1/owners/{owner_id}/organization`  : owner's own listing (protected)

mod read;
mod write;

pub(super) use read::{get_organization, get_owner_organization, list_by_status, list_featured};
pub(super) use write::{create_organization, set_organization_status, update_organization};

use ngodir_core::Organization;
use ngodir_db::{DbError, OrganizationRow};

use super::{map_db_error, ApiError};

fn to_organization(request_id: &str, row: OrganizationRow) -> Result<Organization, ApiError> {
    Organization::try_from(row)
        .map_err(|e| map_db_error(request_id.to_owned(), &DbError::InvalidRow(e)))
}

fn to_organizations(
    request_id: &str,
    rows: Vec<OrganizationRow>,
) -> Result<Vec<Organization>, ApiError> {
    rows.into_iter()
        .map(|row| to_organization(request_id, row))
        .collect()
}
