//! Health check handlers

/// Liveness probe
pub async fn health() -> &'static str {
    "OK"
}

/// Readiness probe
pub async fn ready() -> &'static str {
    "READY"
}
