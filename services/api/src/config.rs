//! Configuration for the API service.

use std::time::Duration;

use loveall_auth_core::AuthConfig;

/// API service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Signing secret (minimum 32 bytes, never a compiled-in literal)
        let token_secret =
            std::env::var("TOKEN_SECRET").map_err(|_| ConfigError::Missing("TOKEN_SECRET"))?;

        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Access token TTL (default 5 minutes)
        let access_ttl_secs: u64 = std::env::var("ACCESS_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_TTL_SECS"))?;

        // Refresh token TTL (default 30 minutes)
        let refresh_ttl_secs: u64 = std::env::var("REFRESH_TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REFRESH_TOKEN_TTL_SECS"))?;

        if refresh_ttl_secs <= access_ttl_secs {
            return Err(ConfigError::Invalid(
                "REFRESH_TOKEN_TTL_SECS must exceed ACCESS_TOKEN_TTL_SECS",
            ));
        }

        let auth = AuthConfig::try_new(token_secret)
            .map_err(|e| ConfigError::Auth(e.to_string()))?
            .with_access_ttl(Duration::from_secs(access_ttl_secs))
            .with_refresh_ttl(Duration::from_secs(refresh_ttl_secs));

        Ok(Self { http_port, auth })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("auth config error: {0}")]
    Auth(String),
}
