//! Love All API
//!
//! HTTP boundary for the Love All backend: login, refresh, identity
//! registration, and the authenticated request surface. Every route is
//! behind the request authenticator layer; public routes are an exact
//! method+path allow-list.

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;

use loveall_axum::{AuthLayer, PublicRoutes};

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the application router with the authenticator layer applied
pub fn router(state: AppState) -> Router {
    // Identity creation, login, and refresh are the only entry points
    // reachable without an access token (refresh authenticates through
    // its own dedicated header).
    let public = PublicRoutes::new()
        .allow(Method::GET, "/health")
        .allow(Method::GET, "/ready")
        .allow(Method::POST, "/login")
        .allow(Method::POST, "/refresh")
        .allow(Method::POST, "/api/v1/users");

    let codec = state.auth.codec().clone();

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/ready", get(handlers::health::ready))
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/api/v1/users", post(handlers::users::create_user))
        .route("/api/v1/me", get(handlers::auth::me))
        .layer(AuthLayer::new(codec, public))
        .with_state(state)
}
