//! User registration handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use loveall_auth_core::hash_password;
use loveall_db::{CreateUser, UserRepository, UserRow};
use loveall_types::Role;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// User representation returned to clients. Never carries the password
/// hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        let role = row.role.parse().unwrap_or_default();
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            role,
            created_at: row.created_at,
        }
    }
}

/// POST /api/v1/users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let Json(req) =
        payload.map_err(|_| ApiError::BadRequest("invalid request body".to_string()))?;

    if !req.email.contains('@') {
        return Err(ApiError::BadRequest("invalid email address".to_string()));
    }
    if req.password.len() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::BadRequest(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let password_hash = hash_password(&req.password)?;

    let row = state
        .users
        .create(CreateUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
            role: req.role.as_str().to_string(),
        })
        .await?;

    tracing::info!(user_id = row.id, "user registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(row))))
}
