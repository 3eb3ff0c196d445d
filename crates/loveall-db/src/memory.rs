//! In-memory user repository
//!
//! Backs the service binary and the test suites. IDs are assigned
//! sequentially, matching what a relational backend would do.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::error::{DbError, DbResult};
use crate::models::UserRow;
use crate::repo::{CreateUser, UserRepository};

/// In-memory user repository
#[derive(Default, Clone)]
pub struct MemoryUserRepository {
    users: Arc<DashMap<i64, UserRow>>,
    by_email: Arc<DashMap<String, i64>>,
    next_id: Arc<AtomicI64>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashMap::new()),
            by_email: Arc::new(DashMap::new()),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn list(&self, offset: u64, limit: u64) -> DbResult<Vec<UserRow>> {
        let mut rows: Vec<UserRow> = self.users.iter().map(|r| r.value().clone()).collect();
        rows.sort_by_key(|r| r.id);
        Ok(rows
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> DbResult<u64> {
        Ok(self.users.len() as u64)
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        if self.by_email.contains_key(&user.email) {
            return Err(DbError::DuplicateEmail);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let row = UserRow {
            id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email.clone(),
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        self.by_email.insert(user.email, id);
        self.users.insert(id, row.clone());
        Ok(row)
    }

    async fn update_password_hash(&self, id: i64, password_hash: &str) -> DbResult<()> {
        match self.users.get_mut(&id) {
            Some(mut user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(())
            }
            None => Err(DbError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        if let Some((_, user)) = self.users.remove(&id) {
            self.by_email.remove(&user.email);
        }
        Ok(())
    }
}
