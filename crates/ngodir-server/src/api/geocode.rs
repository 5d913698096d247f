use axum::{
    extract::{Query, State},
    Extension, Json,
};
use ngodir_core::is_valid_coordinates;
use ngodir_geocode::{GeocodeError, GeocodeResult, ReverseGeocodeResult};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct ForwardParams {
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReverseParams {
    pub lat: f64,
    pub lng: f64,
}

/// GET /api/v1/geocode?address=
pub(super) async fn forward_geocode(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ForwardParams>,
) -> Result<Json<ApiResponse<GeocodeResult>>, ApiError> {
    let rid = &req_id.0;
    let address = params.address.as_deref().map(str::trim).unwrap_or_default();
    if address.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "query parameter 'address' is required",
        ));
    }

    let result = state
        .geocoder
        .geocode(address)
        .await
        .map_err(|e| map_geocode_error(rid, &e))?;
    Ok(Json(ApiResponse::new(result, req_id.0)))
}

/// GET /api/v1/geocode/reverse?lat=&lng=
pub(super) async fn reverse_geocode(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ReverseParams>,
) -> Result<Json<ApiResponse<ReverseGeocodeResult>>, ApiError> {
    let rid = &req_id.0;
    if !is_valid_coordinates(params.lat, params.lng) {
        return Err(ApiError::new(
            rid,
            "validation_error",
            format!("invalid coordinates: {}, {}", params.lat, params.lng),
        ));
    }

    let result = state
        .geocoder
        .reverse_geocode(params.lat, params.lng)
        .await
        .map_err(|e| map_geocode_error(rid, &e))?;
    Ok(Json(ApiResponse::new(result, req_id.0)))
}

fn map_geocode_error(request_id: &str, error: &GeocodeError) -> ApiError {
    if error.is_no_result() {
        return ApiError::new(request_id, "not_found", error.to_string());
    }
    tracing::warn!(error = %error, upstream_status = ?error.upstream_status(), "geocoding failed");
    ApiError::new(request_id, "geocode_failed", error.to_string())
}
