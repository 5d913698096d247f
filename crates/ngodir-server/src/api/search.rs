use axum::{
    extract::{Query, State},
    Extension, Json,
};
use ngodir_search::{smart_search_organizations, PgOrganizationSource, SearchError, SearchResult};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, SearchSettings};

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    pub q: Option<String>,
    pub radius_km: Option<f64>,
}

/// GET /api/v1/search?q=&radius_km=
pub(super) async fn search_organizations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ApiResponse<SearchResult>>, ApiError> {
    let rid = &req_id.0;

    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::new(
            rid,
            "validation_error",
            "query parameter 'q' is required",
        ));
    }
    let radius_km = resolve_radius(&state.search, params.radius_km)
        .map_err(|message| ApiError::new(rid, "validation_error", message))?;

    let source = PgOrganizationSource::new(state.pool.clone());
    let result = smart_search_organizations(
        &source,
        state.geocoder.as_ref(),
        &state.classifier,
        query,
        radius_km,
    )
    .await
    .map_err(|e| map_search_error(rid, &e))?;

    Ok(Json(ApiResponse::new(result, req_id.0)))
}

pub(super) fn resolve_radius(
    settings: &SearchSettings,
    requested: Option<f64>,
) -> Result<f64, String> {
    let radius = requested.unwrap_or(settings.default_radius_km);
    if radius.is_finite() && radius > 0.0 && radius <= settings.max_radius_km {
        Ok(radius)
    } else {
        Err(format!(
            "radius_km must be greater than 0 and at most {}, got {radius}",
            settings.max_radius_km
        ))
    }
}

fn map_search_error(request_id: &str, error: &SearchError) -> ApiError {
    let code = match error {
        SearchError::InvalidRadius(_) => "validation_error",
        SearchError::Geocode(_) => "geocode_failed",
        SearchError::Datastore(_) => "internal_error",
    };
    ApiError::new(request_id, code, error.to_string())
}
