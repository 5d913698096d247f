use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use ngodir_core::{Organization, OrganizationStatus};
use ngodir_db::{DbError, DEFAULT_FEATURED_CITIES, DEFAULT_FEATURED_PER_CITY};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::super::{map_db_error, ApiError, ApiResponse, AppState};
use super::{to_organization, to_organizations};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct StatusFilter {
    pub status: Option<String>,
}

pub(in crate::api) async fn list_featured(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<Organization>>>, ApiError> {
    let rows = ngodir_db::list_featured_organizations(
        &state.pool,
        &DEFAULT_FEATURED_CITIES,
        DEFAULT_FEATURED_PER_CITY,
    )
    .await
    .map_err(|e| map_db_error(req_id.0.clone(), &DbError::from(e)))?;

    let data = to_organizations(&req_id.0, rows)?;
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(in crate::api) async fn get_organization(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Organization>>, ApiError> {
    let rid = &req_id.0;
    let row = ngodir_db::get_organization_by_public_id(&state.pool, public_id)
        .await
        .map_err(|e| map_db_error(rid.clone(), &DbError::from(e)))?
        .ok_or_else(|| {
            ApiError::new(
                rid,
                "not_found",
                format!("organization '{public_id}' not found"),
            )
        })?;

    let data = to_organization(rid, row)?;
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// Owner dashboard lookup: the organization registered by `owner_id`.
pub(in crate::api) async fn get_owner_organization(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(owner_id): Path<String>,
) -> Result<Json<ApiResponse<Organization>>, ApiError> {
    let rid = &req_id.0;
    let row = ngodir_db::get_organization_by_owner(&state.pool, &owner_id)
        .await
        .map_err(|e| map_db_error(rid.clone(), &DbError::from(e)))?
        .ok_or_else(|| {
            ApiError::new(
                rid,
                "not_found",
                format!("owner '{owner_id}' has no organization"),
            )
        })?;

    let data = to_organization(rid, row)?;
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// Admin review queue. Defaults to organizations awaiting verification.
pub(in crate::api) async fn list_by_status(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<StatusFilter>,
) -> Result<Json<ApiResponse<Vec<Organization>>>, ApiError> {
    let rid = &req_id.0;
    let status = match filter.status.as_deref() {
        None => OrganizationStatus::PendingVerification,
        Some(raw) => raw
            .parse::<OrganizationStatus>()
            .map_err(|e| ApiError::new(rid, "validation_error", e.to_string()))?,
    };

    let rows = ngodir_db::list_organizations_by_status(&state.pool, status)
        .await
        .map_err(|e| map_db_error(rid.clone(), &DbError::from(e)))?;

    let data = to_organizations(rid, rows)?;
    Ok(Json(ApiResponse::new(data, req_id.0)))
}
