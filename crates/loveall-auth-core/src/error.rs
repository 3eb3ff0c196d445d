//! Auth errors

use thiserror::Error;

/// Authentication errors
///
/// Every credential/token variant maps to 401 at the HTTP boundary; the
/// caller-visible message stays generic so responses never reveal which
/// check failed. The detailed variant is for server-side diagnostics.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Token is structurally broken (not a JWT, bad base64, bad UTF-8)
    #[error("malformed token")]
    MalformedToken,

    /// Signature does not verify, or the algorithm is not the expected
    /// HMAC family
    #[error("bad token signature")]
    BadSignature,

    /// Token expiry has elapsed
    #[error("token expired")]
    TokenExpired,

    /// No Authorization (or Refresh-Token) header on the request
    #[error("missing auth header")]
    MissingHeader,

    /// Authorization header does not carry the bearer scheme
    #[error("unsupported auth scheme")]
    BadScheme,

    /// Claim fields missing or mistyped
    #[error("invalid token claims")]
    InvalidClaims,

    /// Identity no longer present in the record store
    #[error("user not found")]
    UserNotFound,

    /// Token signing failed (deployment defect, not a client error)
    #[error("token signing failure: {0}")]
    Signing(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Record store error
    #[error("record store error: {0}")]
    Database(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials
            | Self::MalformedToken
            | Self::BadSignature
            | Self::TokenExpired
            | Self::MissingHeader
            | Self::BadScheme
            | Self::InvalidClaims
            | Self::UserNotFound => 401,
            Self::Signing(_) | Self::Internal(_) | Self::Database(_) => 500,
        }
    }
}

impl From<loveall_db::DbError> for AuthError {
    fn from(err: loveall_db::DbError) -> Self {
        tracing::error!("record store error: {}", err);
        Self::Database(err.to_string())
    }
}
