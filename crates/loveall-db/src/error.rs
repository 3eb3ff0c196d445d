//! Record store errors

use thiserror::Error;

/// Record store errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Record not found
    #[error("record not found")]
    NotFound,

    /// Unique email constraint violated
    #[error("email already registered")]
    DuplicateEmail,

    /// Backend failure
    #[error("record store error: {0}")]
    Internal(String),
}

/// Result alias for record store operations
pub type DbResult<T> = Result<T, DbError>;
