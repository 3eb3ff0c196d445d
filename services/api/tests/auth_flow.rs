//! End-to-end HTTP tests for the auth surface: registration, login,
//! protected routes, and the refresh exchange.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use loveall_api::{AppState, Config};
use loveall_auth_core::AuthConfig;
use loveall_db::UserRepository;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

fn test_state() -> AppState {
    let auth = AuthConfig::try_new(SECRET.to_string())
        .unwrap()
        .with_access_ttl(Duration::from_secs(300))
        .with_refresh_ttl(Duration::from_secs(360));
    AppState::new(Config {
        http_port: 0,
        auth,
    })
}

fn app(state: &AppState) -> Router {
    loveall_api::router(state.clone())
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(state: &AppState, email: &str, password: &str) -> Value {
    let response = app(state)
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": email,
                "password": password,
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response).await
}

async fn login(state: &AppState, email: &str, password: &str) -> axum::response::Response {
    app(state)
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_register_then_login() {
    let state = test_state();
    let user = register(&state, "ada@example.com", "correct horse").await;
    assert_eq!(user["email"], "ada@example.com");
    assert_eq!(user["role"], "user");
    assert!(user.get("password_hash").is_none());

    let response = login(&state, "ada@example.com", "correct horse").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let access = body["access_token"].as_str().unwrap();
    let refresh = body["refresh_token"].as_str().unwrap();
    assert!(!access.is_empty());
    assert_ne!(access, refresh);
}

#[tokio::test]
async fn test_duplicate_registration_is_409() {
    let state = test_state();
    register(&state, "ada@example.com", "correct horse").await;

    let response = app(&state)
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "password": "other password",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_registration_rejects_short_password() {
    let state = test_state();
    let response = app(&state)
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users",
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "password": "short",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let state = test_state();
    register(&state, "ada@example.com", "correct horse").await;

    let wrong_password = login(&state, "ada@example.com", "wrong password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body = json_body(wrong_password).await;

    let unknown_email = login(&state, "nobody@example.com", "wrong password").await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email_body = json_body(unknown_email).await;

    // Same body either way, and no hint about which check failed
    assert_eq!(wrong_password_body, unknown_email_body);
    assert_eq!(
        wrong_password_body["error"],
        "invalid or missing credentials"
    );
}

#[tokio::test]
async fn test_login_malformed_body_is_400() {
    let state = test_state();
    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_me_requires_token() {
    let state = test_state();
    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_echoes_identity() {
    let state = test_state();
    register(&state, "ada@example.com", "correct horse").await;
    let tokens = json_body(login(&state, "ada@example.com", "correct horse").await).await;

    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/v1/me")
                .header(
                    header::AUTHORIZATION,
                    format!("Bearer {}", tokens["access_token"].as_str().unwrap()),
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["role"], "user");
}

#[tokio::test]
async fn test_refresh_exchanges_token_pair() {
    let state = test_state();
    register(&state, "ada@example.com", "correct horse").await;
    let tokens = json_body(login(&state, "ada@example.com", "correct horse").await).await;

    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/refresh")
                .header("Refresh-Token", tokens["refresh_token"].as_str().unwrap())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["access_token"].as_str().is_some());
    assert!(body["refresh_token"].as_str().is_some());
}

#[tokio::test]
async fn test_refresh_without_header_is_401() {
    let state = test_state();
    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = json_body(response).await;
    assert_eq!(body["error"], "invalid or missing credentials");
}

#[tokio::test]
async fn test_refresh_rejects_foreign_signature() {
    let state = test_state();
    register(&state, "ada@example.com", "correct horse").await;

    // Token signed under a different secret
    let foreign = AuthConfig::try_new("ffffffffffffffffffffffffffffffff".to_string()).unwrap();
    let foreign_state = AppState::new(Config {
        http_port: 0,
        auth: foreign,
    });
    register(&foreign_state, "ada@example.com", "correct horse").await;
    let tokens = json_body(login(&foreign_state, "ada@example.com", "correct horse").await).await;

    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/refresh")
                .header("Refresh-Token", tokens["refresh_token"].as_str().unwrap())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_after_user_deletion_is_401() {
    let state = test_state();
    let user = register(&state, "ada@example.com", "correct horse").await;
    let tokens = json_body(login(&state, "ada@example.com", "correct horse").await).await;

    state
        .users
        .delete(user["id"].as_i64().unwrap())
        .await
        .unwrap();

    let response = app(&state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/refresh")
                .header("Refresh-Token", tokens["refresh_token"].as_str().unwrap())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_probes_are_public() {
    let state = test_state();
    for uri in ["/health", "/ready"] {
        let response = app(&state)
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
