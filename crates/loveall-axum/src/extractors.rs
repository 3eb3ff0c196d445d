//! Axum extractors for the bound auth context.

use std::ops::Deref;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::context::AuthContext;
use crate::error::AuthRejection;

/// Extension key for storing the auth context in request extensions
#[derive(Debug, Clone)]
pub struct AuthContextExt(pub AuthContext);

/// Extractor that requires an authenticated context.
///
/// Returns a generic 401 if the authenticator did not bind claims to
/// this request.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthContext);

impl Deref for RequireAuth {
    type Target = AuthContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContextExt>()
            .cloned()
            .map(|ext| Self(ext.0))
            .ok_or(AuthRejection)
    }
}

/// Extractor for optional authentication.
///
/// Yields `None` on public routes where no token was presented.
#[derive(Debug, Clone)]
pub struct MaybeAuth(pub Option<AuthContext>);

impl Deref for MaybeAuth {
    type Target = Option<AuthContext>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth = parts
            .extensions
            .get::<AuthContextExt>()
            .cloned()
            .map(|ext| ext.0);
        Ok(Self(auth))
    }
}
