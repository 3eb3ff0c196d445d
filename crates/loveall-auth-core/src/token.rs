//! Signed token encoding and decoding
//!
//! Tokens are JWTs signed with HMAC-SHA256 over a shared secret. The
//! decoder pins the algorithm to HS256, so a token whose header names
//! any other algorithm is rejected outright (algorithm-substitution
//! defense), and enforces expiry with zero leeway.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use loveall_db::UserRow;
use loveall_types::Role;

use crate::AuthError;

/// Claim set embedded in access and refresh tokens
///
/// All three identity fields plus the expiry are required; a token
/// missing any of them never decodes into a `Claims`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric identity ID
    pub user_id: i64,
    /// Identity email (refresh re-resolves the identity by this)
    pub user_email: String,
    /// Role claim, available to downstream authorization
    pub user_role: Role,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

impl Claims {
    /// Build a claim set for a stored identity
    pub fn for_user(user: &UserRow, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            user_email: user.email.clone(),
            // Unknown stored role strings demote to the plain user role
            user_role: user.role.parse().unwrap_or_default(),
            exp: expires_at.timestamp(),
        }
    }

    /// Check whether the expiry has elapsed
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Stateless token codec
///
/// Holds the derived signing keys; encode and decode are pure apart
/// from the decoder's wall-clock read, so arbitrarily many requests may
/// run them in parallel.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec over the shared signing secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact: a token one second past exp is already invalid
        validation.leeway = 0;
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Encode and sign a claim set
    pub fn encode(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            // Indicates a deployment defect, not a client error
            tracing::error!("token signing failed: {}", e);
            AuthError::Signing(e.to_string())
        })
    }

    /// Decode a token, verifying signature and expiry
    ///
    /// On any structural, signature, or expiry failure this returns a
    /// typed error rather than partial claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("token validation failed: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::InvalidAlgorithmName => AuthError::BadSignature,
                    ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                        AuthError::InvalidClaims
                    }
                    _ => AuthError::MalformedToken,
                }
            })
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}
