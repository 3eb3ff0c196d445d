//! Love All Auth Core - Authentication business logic
//!
//! Core authentication functionality: credential verification, signed
//! token encoding/decoding, token pair issuance, and the refresh
//! exchange flow. Stateless apart from identity reads through the
//! record store.

pub mod config;
pub mod error;
pub mod issuer;
pub mod password;
pub mod service;
pub mod token;

pub use config::{AuthConfig, ConfigError};
pub use error::AuthError;
pub use issuer::TokenIssuer;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use token::{Claims, TokenCodec};
