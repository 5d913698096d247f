use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use ngodir_core::{
    Address, Contact, Location, Organization, OrganizationStatus, OrganizationType,
    VerificationBadge,
};
use ngodir_db::{DbError, NewOrganization, OrganizationPatch, StatusChange};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::super::{map_db_error, ApiError, ApiResponse, AppState};
use super::to_organization;

const MAX_NAME_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(in crate::api) struct CreateOrganizationRequest {
    pub owner_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub org_type: OrganizationType,
    pub tagline: Option<String>,
    #[serde(default)]
    pub description: String,
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub area: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub logo_url: Option<String>,
}

/// Sparse update: absent fields keep their stored value, and a blank string
/// clears an optional field.
#[derive(Debug, Default, Deserialize)]
pub(in crate::api) struct UpdateOrganizationRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
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

#[derive(Debug, Deserialize)]
pub(in crate::api) struct StatusChangeRequest {
    pub status: OrganizationStatus,
    pub badge: Option<VerificationBadge>,
    pub reason: Option<String>,
    pub verified_by: Option<String>,
}

impl From<CreateOrganizationRequest> for NewOrganization {
    fn from(body: CreateOrganizationRequest) -> Self {
        Self {
            owner_id: body.owner_id,
            name: body.name,
            org_type: body.org_type,
            tagline: body.tagline,
            description: body.description,
            contact: Contact {
                phone: body.phone,
                alternate_phone: body.alternate_phone,
                email: body.email,
                website: body.website,
                facebook: body.facebook,
                instagram: body.instagram,
                twitter: body.twitter,
            },
            address: Address {
                street: body.street,
                area: body.area,
                city: body.city,
                state: body.state,
                pincode: body.pincode,
                country: body.country,
            },
            location: Location {
                latitude: body.latitude,
                longitude: body.longitude,
                place_id: body.place_id,
                formatted_address: body.formatted_address,
            },
            logo_url: body.logo_url,
        }
    }
}

impl From<UpdateOrganizationRequest> for OrganizationPatch {
    fn from(body: UpdateOrganizationRequest) -> Self {
        Self {
            name: body.name,
            org_type: body.org_type,
            tagline: body.tagline,
            description: body.description,
            phone: body.phone,
            alternate_phone: body.alternate_phone,
            email: body.email,
            website: body.website,
            facebook: body.facebook,
            instagram: body.instagram,
            twitter: body.twitter,
            street: body.street,
            area: body.area,
            city: body.city,
            state: body.state,
            pincode: body.pincode,
            country: body.country,
            latitude: body.latitude,
            longitude: body.longitude,
            place_id: body.place_id,
            formatted_address: body.formatted_address,
            logo_url: body.logo_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

fn validate_name(req_id: &str, name: &str) -> Result<(), ApiError> {
    let len = name.trim().chars().count();
    if len == 0 || len > MAX_NAME_CHARS {
        return Err(ApiError::new(
            req_id,
            "validation_error",
            format!("name must be 1-{MAX_NAME_CHARS} characters"),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/organizations : onboard a new organization.
///
/// New organizations wait in `pending_verification` until an admin acts.
pub(in crate::api) async fn create_organization(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateOrganizationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Organization>>), ApiError> {
    let rid = &req_id.0;
    validate_name(rid, &body.name)?;

    let exists = ngodir_db::owner_has_organization(&state.pool, &body.owner_id)
        .await
        .map_err(|e| map_db_error(rid.clone(), &DbError::from(e)))?;
    if exists {
        return Err(ApiError::new(
            rid,
            "conflict",
            format!("owner '{}' already has an organization", body.owner_id),
        ));
    }

    let row = ngodir_db::create_organization(&state.pool, &NewOrganization::from(body))
        .await
        .map_err(|e| map_db_error(rid.clone(), &e))?;
    let organization = to_organization(rid, row)?;

    tracing::info!(
        public_id = %organization.public_id,
        owner_id = %organization.owner_id,
        "organization created"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(organization, req_id.0)),
    ))
}

/// PATCH /api/v1/organizations/{public_id}
pub(in crate::api) async fn update_organization(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(public_id): Path<Uuid>,
    Json(body): Json<UpdateOrganizationRequest>,
) -> Result<Json<ApiResponse<Organization>>, ApiError> {
    let rid = &req_id.0;
    if let Some(ref name) = body.name {
        validate_name(rid, name)?;
    }

    let patch = OrganizationPatch::from(body);
    if patch.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "request body contains no fields to update",
        ));
    }

    let row = ngodir_db::update_organization(&state.pool, public_id, patch)
        .await
        .map_err(|e| map_db_error(rid.clone(), &e))?;

    let data = to_organization(rid, row)?;
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// PUT /api/v1/organizations/{public_id}/status : admin verification decision.
pub(in crate::api) async fn set_organization_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(public_id): Path<Uuid>,
    Json(body): Json<StatusChangeRequest>,
) -> Result<Json<ApiResponse<Organization>>, ApiError> {
    let rid = &req_id.0;
    let change = StatusChange {
        status: body.status,
        badge: body.badge,
        reason: body.reason,
        verified_by: body.verified_by,
    };

    let row = ngodir_db::set_organization_status(&state.pool, public_id, &change)
        .await
        .map_err(|e| map_db_error(rid.clone(), &e))?;
    let organization = to_organization(rid, row)?;

    tracing::info!(
        public_id = %public_id,
        status = %organization.status,
        "organization status changed"
    );
    Ok(Json(ApiResponse::new(organization, req_id.0)))
}
