//! Love All Axum Integration
//!
//! Axum middleware and extractors for the Love All auth layer:
//! - [`AuthLayer`] gates every request behind access-token validation,
//!   with an exact method+path allow-list for public routes
//! - [`RequireAuth`] / [`MaybeAuth`] give handlers access to the bound
//!   identity claims
//!
//! ```ignore
//! use loveall_axum::{AuthLayer, PublicRoutes, RequireAuth};
//! use axum::{routing::get, Router};
//!
//! async fn me(auth: RequireAuth) -> String {
//!     format!("hello {}", auth.email)
//! }
//!
//! let public = PublicRoutes::new().allow(axum::http::Method::POST, "/login");
//! let app = Router::new()
//!     .route("/api/v1/me", get(me))
//!     .layer(AuthLayer::new(codec, public));
//! ```

pub mod context;
pub mod error;
pub mod extractors;
pub mod layer;

pub use context::AuthContext;
pub use error::{AuthRejection, GENERIC_AUTH_MESSAGE};
pub use extractors::{AuthContextExt, MaybeAuth, RequireAuth};
pub use layer::{AuthLayer, Authenticator, PublicRoutes};
