//! Configuration types for the auth core

use std::time::Duration;

/// Auth configuration
///
/// Built once at startup from environment-supplied values and injected
/// into the codec, issuer, and authenticator. The signing secret is
/// never a compiled-in literal.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HMAC signing secret for access and refresh tokens
    pub token_secret: String,
    /// Access token lifetime
    pub access_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    /// Minimum allowed secret length in bytes (256 bits)
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Default access token lifetime
    pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(5 * 60);

    /// Default refresh token lifetime (6x the access window)
    pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(30 * 60);

    /// Create a new auth config
    ///
    /// # Errors
    /// Returns an error if the secret is shorter than 32 bytes.
    pub fn try_new(token_secret: impl Into<String>) -> Result<Self, ConfigError> {
        let token_secret = token_secret.into();
        if token_secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort {
                actual: token_secret.len(),
                minimum: Self::MIN_SECRET_LENGTH,
            });
        }
        Ok(Self {
            token_secret,
            access_ttl: Self::DEFAULT_ACCESS_TTL,
            refresh_ttl: Self::DEFAULT_REFRESH_TTL,
        })
    }

    /// Set the access token lifetime
    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    /// Set the refresh token lifetime
    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }
}

/// Errors that can occur when building an [`AuthConfig`]
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("token secret too short: got {actual} bytes, need at least {minimum}")]
    SecretTooShort { actual: usize, minimum: usize },
}
