//! Login and refresh flow tests against the in-memory record store

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use loveall_auth_core::{AuthConfig, AuthError, AuthService, Claims, TokenCodec};
use loveall_db::{CreateUser, MemoryUserRepository, UserRepository};
use loveall_types::Role;

const SECRET: &str = "0123456789abcdef0123456789abcdef";

async fn service_with_user() -> (AuthService<MemoryUserRepository>, Arc<MemoryUserRepository>) {
    let repo = Arc::new(MemoryUserRepository::new());
    repo.create(CreateUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "a@x.com".to_string(),
        password_hash: bcrypt::hash("correct", 4).unwrap(),
        role: "user".to_string(),
    })
    .await
    .unwrap();

    let config = AuthConfig::try_new(SECRET).unwrap();
    (AuthService::new(&config, Arc::clone(&repo)), repo)
}

#[tokio::test]
async fn test_login_success_mints_distinct_pair() {
    let (service, _) = service_with_user().await;

    let pair = service.login("a@x.com", "correct").await.unwrap();
    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert_ne!(pair.access_token, pair.refresh_token);

    let access = service.codec().decode(&pair.access_token).unwrap();
    let refresh = service.codec().decode(&pair.refresh_token).unwrap();
    assert_eq!(access.user_email, "a@x.com");
    assert_eq!(access.user_role, Role::User);
    assert!(access.exp < refresh.exp);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (service, _) = service_with_user().await;
    let result = service.login("a@x.com", "wrong").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_unknown_email_same_error_as_wrong_password() {
    let (service, _) = service_with_user().await;

    let unknown = service.login("nobody@x.com", "correct").await.unwrap_err();
    let mismatch = service.login("a@x.com", "wrong").await.unwrap_err();

    // Same variant either way: responses cannot enumerate identities
    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(mismatch, AuthError::InvalidCredentials));
}

#[tokio::test]
async fn test_refresh_mints_new_pair() {
    let (service, _) = service_with_user().await;
    let pair = service.login("a@x.com", "correct").await.unwrap();

    let fresh = service.refresh(&pair.refresh_token).await.unwrap();
    let claims = service.codec().decode(&fresh.access_token).unwrap();
    assert_eq!(claims.user_email, "a@x.com");
}

#[tokio::test]
async fn test_refresh_rejects_foreign_signature() {
    let (service, _) = service_with_user().await;

    let foreign = TokenCodec::new(b"another-secret-another-secret-32");
    let token = foreign
        .encode(&Claims {
            user_id: 1,
            user_email: "a@x.com".to_string(),
            user_role: Role::User,
            exp: (Utc::now() + chrono::Duration::minutes(30)).timestamp(),
        })
        .unwrap();

    let result = service.refresh(&token).await;
    assert!(matches!(result, Err(AuthError::BadSignature)));
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let (service, _) = service_with_user().await;

    // Same secret, but the refresh window has elapsed
    let codec = TokenCodec::new(SECRET.as_bytes());
    let token = codec
        .encode(&Claims {
            user_id: 1,
            user_email: "a@x.com".to_string(),
            user_role: Role::User,
            exp: (Utc::now() - chrono::Duration::seconds(1)).timestamp(),
        })
        .unwrap();

    let result = service.refresh(&token).await;
    assert!(matches!(result, Err(AuthError::TokenExpired)));
}

#[tokio::test]
async fn test_refresh_after_identity_deleted() {
    let (service, repo) = service_with_user().await;
    let pair = service.login("a@x.com", "correct").await.unwrap();

    repo.delete(1).await.unwrap();

    let result = service.refresh(&pair.refresh_token).await;
    assert!(matches!(result, Err(AuthError::InvalidClaims)));
}

#[tokio::test]
async fn test_ttls_come_from_config() {
    let repo = Arc::new(MemoryUserRepository::new());
    repo.create(CreateUser {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "a@x.com".to_string(),
        password_hash: bcrypt::hash("correct", 4).unwrap(),
        role: "admin".to_string(),
    })
    .await
    .unwrap();

    let config = AuthConfig::try_new(SECRET)
        .unwrap()
        .with_access_ttl(Duration::from_secs(60))
        .with_refresh_ttl(Duration::from_secs(120));
    let service = AuthService::new(&config, repo);

    let before = Utc::now().timestamp();
    let pair = service.login("a@x.com", "correct").await.unwrap();
    let access = service.codec().decode(&pair.access_token).unwrap();
    let refresh = service.codec().decode(&pair.refresh_token).unwrap();

    assert!((access.exp - before - 60).abs() <= 2);
    assert!((refresh.exp - before - 120).abs() <= 2);
    assert_eq!(access.user_role, Role::Admin);
}
