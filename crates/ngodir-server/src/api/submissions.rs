//! User submissions: the public suggests an organization, admins review the
//! list and mark entries once the organization has registered.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use ngodir_core::UserSubmission;
use ngodir_db::{DbError, NewUserSubmission};
use serde::Deserialize;
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct CreateSubmissionRequest {
    pub user_name: String,
    pub user_email: Option<String>,
    pub ngo_name: String,
    pub ngo_email: Option<String>,
    pub ngo_phone_number: Option<String>,
    pub ngo_address: String,
    pub ngo_type: Option<String>,
}

impl From<CreateSubmissionRequest> for NewUserSubmission {
    fn from(body: CreateSubmissionRequest) -> Self {
        Self {
            user_name: body.user_name,
            user_email: body.user_email,
            ngo_name: body.ngo_name,
            ngo_email: body.ngo_email,
            ngo_phone_number: body.ngo_phone_number,
            ngo_address: body.ngo_address,
            ngo_type: body.ngo_type,
        }
    }
}

/// POST /api/v1/submissions
pub(super) async fn create_submission(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<CreateSubmissionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserSubmission>>), ApiError> {
    let row = ngodir_db::create_user_submission(&state.pool, &NewUserSubmission::from(body))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(UserSubmission::from(row), req_id.0)),
    ))
}

/// GET /api/v1/submissions : newest first.
pub(super) async fn list_submissions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<UserSubmission>>>, ApiError> {
    let rows = ngodir_db::list_user_submissions(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &DbError::from(e)))?;

    let data = rows.into_iter().map(UserSubmission::from).collect();
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// POST /api/v1/submissions/{public_id}/registered
pub(super) async fn mark_registered(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserSubmission>>, ApiError> {
    let row = ngodir_db::mark_submission_registered(&state.pool, public_id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(UserSubmission::from(row), req_id.0)))
}
