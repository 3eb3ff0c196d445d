//! Auth service - ties together credential verification, token
//! issuance, and the refresh exchange

use std::sync::Arc;

use loveall_db::UserRepository;
use loveall_types::TokenPair;

use crate::config::AuthConfig;
use crate::issuer::TokenIssuer;
use crate::password::verify_password;
use crate::token::TokenCodec;
use crate::AuthError;

/// Authentication service
///
/// The only stateful collaborator is the identity read through the
/// record store; everything else is pure, so the service is cheap to
/// share across request tasks.
pub struct AuthService<U: UserRepository> {
    codec: TokenCodec,
    issuer: TokenIssuer,
    users: Arc<U>,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new auth service from validated configuration
    pub fn new(config: &AuthConfig, users: Arc<U>) -> Self {
        let codec = TokenCodec::new(config.token_secret.as_bytes());
        let issuer = TokenIssuer::new(codec.clone(), config.access_ttl, config.refresh_ttl);
        Self {
            codec,
            issuer,
            users,
        }
    }

    /// Codec handle for the request authenticator middleware
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Verify credentials and mint a token pair
    ///
    /// Unknown email and wrong password collapse into the same error so
    /// responses cannot be used to enumerate identities.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AuthError> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("login rejected: unknown email");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !verify_password(&user.password_hash, password) {
            tracing::debug!(user_id = user.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        self.issuer.issue(&user)
    }

    /// Exchange a refresh token for a fresh pair
    ///
    /// Expired refresh tokens are rejected outright; the client must
    /// log in again. The identity is re-resolved by the email claim so
    /// a deleted identity cannot keep refreshing, and that case is
    /// indistinguishable from an invalid token in the response.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let claims = self.codec.decode(refresh_token)?;

        let user = match self.users.find_by_email(&claims.user_email).await? {
            Some(user) => user,
            None => {
                tracing::debug!("refresh rejected: identity no longer present");
                return Err(AuthError::InvalidClaims);
            }
        };

        self.issuer.issue(&user)
    }
}

impl<U: UserRepository> std::fmt::Debug for AuthService<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}
