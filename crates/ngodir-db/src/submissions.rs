//! Database operations for the `user_submissions` table: suggestions from
//! the public for organizations that are not listed yet.

use chrono::{DateTime, Utc};
use ngodir_core::UserSubmission;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{non_blank, DbError};

const SUBMISSION_COLUMNS: &str = "id, public_id, user_name, user_email, ngo_name, ngo_email, \
     ngo_phone_number, ngo_address, ngo_type, ngo_registered, created_at, updated_at";

/// Input record for a new user submission.
#[derive(Debug, Clone, Default)]
pub struct NewUserSubmission {
    pub user_name: String,
    pub user_email: Option<String>,
    pub ngo_name: String,
    pub ngo_email: Option<String>,
    pub ngo_phone_number: Option<String>,
    pub ngo_address: String,
    pub ngo_type: Option<String>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserSubmissionRow {
    pub id: i64,
    pub public_id: Uuid,
    pub user_name: String,
    pub user_email: Option<String>,
    pub ngo_name: String,
    pub ngo_email: Option<String>,
    pub ngo_phone_number: Option<String>,
    pub ngo_address: String,
    pub ngo_type: Option<String>,
    pub ngo_registered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserSubmissionRow> for UserSubmission {
    fn from(row: UserSubmissionRow) -> Self {
        Self {
            public_id: row.public_id,
            user_name: row.user_name,
            user_email: row.user_email,
            ngo_name: row.ngo_name,
            ngo_email: row.ngo_email,
            ngo_phone_number: row.ngo_phone_number,
            ngo_address: row.ngo_address,
            ngo_type: row.ngo_type,
            ngo_registered: row.ngo_registered,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Record a new submission with `ngo_registered = false`.
///
/// # Errors
///
/// Returns [`DbError::Validation`] if the submitter name, organization name,
/// or organization address is blank, or [`DbError::Sqlx`] if the insert fails.
pub async fn create_user_submission(
    pool: &PgPool,
    new: &NewUserSubmission,
) -> Result<UserSubmissionRow, DbError> {
    let user_name = non_blank(&new.user_name)
        .ok_or_else(|| DbError::Validation("user_name must not be empty".to_string()))?;
    let ngo_name = non_blank(&new.ngo_name)
        .ok_or_else(|| DbError::Validation("ngo_name must not be empty".to_string()))?;
    let ngo_address = non_blank(&new.ngo_address)
        .ok_or_else(|| DbError::Validation("ngo_address must not be empty".to_string()))?;

    let sql = format!(
        "INSERT INTO user_submissions \
             (user_name, user_email, ngo_name, ngo_email, ngo_phone_number, ngo_address, ngo_type) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         RETURNING {SUBMISSION_COLUMNS}"
    );
    let row = sqlx::query_as::<_, UserSubmissionRow>(&sql)
        .bind(&user_name)
        .bind(new.user_email.as_deref().and_then(non_blank))
        .bind(&ngo_name)
        .bind(new.ngo_email.as_deref().and_then(non_blank))
        .bind(new.ngo_phone_number.as_deref().and_then(non_blank))
        .bind(&ngo_address)
        .bind(new.ngo_type.as_deref().and_then(non_blank))
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// All submissions, newest first.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_user_submissions(pool: &PgPool) -> Result<Vec<UserSubmissionRow>, sqlx::Error> {
    let sql =
        format!("SELECT {SUBMISSION_COLUMNS} FROM user_submissions ORDER BY created_at DESC, id DESC");
    sqlx::query_as::<_, UserSubmissionRow>(&sql)
        .fetch_all(pool)
        .await
}

/// Flag a submission as registered once the organization has been onboarded.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no submission has `public_id`, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn mark_submission_registered(
    pool: &PgPool,
    public_id: Uuid,
) -> Result<UserSubmissionRow, DbError> {
    let sql = format!(
        "UPDATE user_submissions \
         SET ngo_registered = TRUE, updated_at = NOW() \
         WHERE public_id = $1 \
         RETURNING {SUBMISSION_COLUMNS}"
    );
    sqlx::query_as::<_, UserSubmissionRow>(&sql)
        .bind(public_id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)
}
