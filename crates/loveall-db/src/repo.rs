//! Repository traits
//!
//! Async record store interface the auth core and handlers consume.

use async_trait::async_trait;

use crate::error::DbResult;
use crate::models::UserRow;

/// User repository trait
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// List users with offset pagination
    async fn list(&self, offset: u64, limit: u64) -> DbResult<Vec<UserRow>>;

    /// Count all users
    async fn count(&self) -> DbResult<u64>;

    /// Create a new user
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;

    /// Replace a user's password hash
    async fn update_password_hash(&self, id: i64, password_hash: &str) -> DbResult<()>;

    /// Delete a user
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
