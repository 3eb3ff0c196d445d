//! Authentication result types

use serde::{Deserialize, Serialize};

/// Access/refresh token pair returned by login and refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived token presented on every authenticated request
    pub access_token: String,
    /// Longer-lived token exchanged for a fresh pair
    pub refresh_token: String,
}
