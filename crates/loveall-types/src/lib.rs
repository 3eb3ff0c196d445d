//! Love All Types - Shared domain types
//!
//! This crate contains domain types used across the Love All backend:
//! - User identity and roles
//! - Token pair issued at login/refresh

pub mod auth;
pub mod user;

pub use auth::*;
pub use user::*;
