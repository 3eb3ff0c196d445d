//! Record store row models

use chrono::{DateTime, Utc};

/// User row from the record store
///
/// `password_hash` is an opaque bcrypt string; only the credential
/// verifier interprets it.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
