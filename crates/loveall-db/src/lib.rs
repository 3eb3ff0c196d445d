//! Love All record store
//!
//! The auth core consumes identities through the [`UserRepository`]
//! trait; persistence engines behind it are interchangeable. This crate
//! ships the trait contract, the row types, and an in-memory
//! implementation suitable for the service binary and tests.

pub mod error;
pub mod memory;
pub mod models;
pub mod repo;

pub use error::{DbError, DbResult};
pub use memory::MemoryUserRepository;
pub use models::UserRow;
pub use repo::{CreateUser, UserRepository};
