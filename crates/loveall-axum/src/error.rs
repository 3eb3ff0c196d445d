//! Auth rejection response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Caller-visible message for every 401
///
/// Deliberately generic: which check failed is internal diagnostics,
/// available only through debug logs.
pub const GENERIC_AUTH_MESSAGE: &str = "invalid or missing credentials";

#[derive(Debug, Serialize)]
struct RejectionBody {
    error: &'static str,
}

/// Rejection produced when no auth context is bound to the request
#[derive(Debug, Clone, Copy)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(RejectionBody {
                error: GENERIC_AUTH_MESSAGE,
            }),
        )
            .into_response()
    }
}
