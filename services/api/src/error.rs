//! API error responses.
//!
//! Every handler returns `ApiResult<T>`; failures render as a JSON
//! `{"error": "..."}` body. All authentication failures collapse to the
//! same 401 message so the response never hints at which check failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use loveall_auth_core::AuthError;
use loveall_axum::GENERIC_AUTH_MESSAGE;
use loveall_db::DbError;

pub type ApiResult<T> = Result<T, ApiError>;

/// API error
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Database(#[from] DbError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Auth(e) => {
                let status = StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                if status == StatusCode::UNAUTHORIZED {
                    (status, GENERIC_AUTH_MESSAGE.to_string())
                } else {
                    tracing::error!(error = %e, "auth service failure");
                    (status, "internal error".to_string())
                }
            }
            ApiError::Database(DbError::DuplicateEmail) => (
                StatusCode::CONFLICT,
                "email already registered".to_string(),
            ),
            ApiError::Database(DbError::NotFound) => {
                (StatusCode::NOT_FOUND, "not found".to_string())
            }
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
