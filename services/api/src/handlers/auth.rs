//! Login, refresh, and identity echo handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use loveall_auth_core::AuthError;
use loveall_axum::RequireAuth;
use loveall_types::{Role, TokenPair};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Name of the header carrying the refresh token
pub const REFRESH_TOKEN_HEADER: &str = "Refresh-Token";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login
///
/// Verifies credentials and returns a fresh token pair. Unknown email
/// and wrong password are indistinguishable in the response.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenPair>> {
    let Json(req) =
        payload.map_err(|_| ApiError::BadRequest("invalid request body".to_string()))?;

    let pair = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(pair))
}

/// POST /refresh
///
/// Exchanges an unexpired refresh token (sent in the Refresh-Token
/// header) for a new token pair.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<TokenPair>> {
    let token = headers
        .get(REFRESH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Auth(AuthError::MissingHeader))?;

    let pair = state.auth.refresh(token).await?;
    Ok(Json(pair))
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

/// GET /api/v1/me
///
/// Echoes the identity bound to the request by the authenticator.
pub async fn me(auth: RequireAuth) -> Json<MeResponse> {
    Json(MeResponse {
        id: auth.user_id.0,
        email: auth.email.clone(),
        role: auth.role,
    })
}
