//! Application state

use std::sync::Arc;

use loveall_auth_core::AuthService;
use loveall_db::MemoryUserRepository;

use crate::config::Config;

/// Type alias for the auth service with the concrete repository type
pub type AuthServiceImpl = AuthService<MemoryUserRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth service for credential verification and token issuance
    pub auth: Arc<AuthServiceImpl>,
    /// User record store
    pub users: Arc<MemoryUserRepository>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let users = Arc::new(MemoryUserRepository::new());
        let auth = Arc::new(AuthService::new(&config.auth, Arc::clone(&users)));
        Self {
            auth,
            users,
            config: Arc::new(config),
        }
    }
}
