//! Authenticated request context.
//!
//! [`AuthContext`] holds the identity fields bound by the request
//! authenticator. It lives in the request's extensions, is read by
//! downstream handlers, and is discarded when the request ends.

use loveall_auth_core::Claims;
use loveall_types::{Role, UserId};

/// Identity claims bound to an authenticated request
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The authenticated user's ID
    pub user_id: UserId,
    /// The authenticated user's email
    pub email: String,
    /// Role claim, for downstream authorization decisions
    pub role: Role,
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: UserId(claims.user_id),
            email: claims.user_email,
            role: claims.user_role,
        }
    }
}
