//! Token pair issuance

use std::time::Duration;

use chrono::{Duration as ChronoDuration, Utc};

use loveall_db::UserRow;
use loveall_types::TokenPair;

use crate::token::{Claims, TokenCodec};
use crate::AuthError;

/// Mints access/refresh token pairs for an authenticated identity
///
/// Both tokens are signed with the same shared secret; they differ only
/// in lifetime. Pure aside from reading the wall clock; issued tokens
/// are not persisted anywhere.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    codec: TokenCodec,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create a new issuer
    pub fn new(codec: TokenCodec, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issue a fresh token pair for an identity
    pub fn issue(&self, user: &UserRow) -> Result<TokenPair, AuthError> {
        let now = Utc::now();
        let access_exp = now + ChronoDuration::seconds(self.access_ttl.as_secs() as i64);
        let refresh_exp = now + ChronoDuration::seconds(self.refresh_ttl.as_secs() as i64);

        let access_token = self.codec.encode(&Claims::for_user(user, access_exp))?;
        let refresh_token = self.codec.encode(&Claims::for_user(user, refresh_exp))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }
}
