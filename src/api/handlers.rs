//! HTTP API handlers.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Environment variable holding the deployed version.
pub const APP_VERSION_VAR: &str = "APP_VERSION";

/// Fallback body when the version variable is unset or empty.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Health check handler - always returns 200.
pub async fn healthz() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// Version handler - returns the deployed version as plain text.
pub async fn version() -> String {
    current_version()
}

/// Current version from the environment, or [`UNKNOWN_VERSION`] when
/// `APP_VERSION` is unset or empty. Read fresh on every call, never cached.
pub fn current_version() -> String {
    match std::env::var(APP_VERSION_VAR) {
        Ok(v) if !v.is_empty() => v,
        _ => UNKNOWN_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that mutate APP_VERSION; test threads share one
    // process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn current_version_falls_back_to_unknown() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::remove_var(APP_VERSION_VAR);
        assert_eq!(current_version(), UNKNOWN_VERSION);

        std::env::set_var(APP_VERSION_VAR, "");
        assert_eq!(current_version(), UNKNOWN_VERSION);

        std::env::remove_var(APP_VERSION_VAR);
    }

    #[test]
    fn current_version_reads_environment_each_call() {
        let _guard = ENV_LOCK.lock().unwrap();

        std::env::set_var(APP_VERSION_VAR, "1.2.3");
        assert_eq!(current_version(), "1.2.3");

        std::env::set_var(APP_VERSION_VAR, "2.0.0");
        assert_eq!(current_version(), "2.0.0");

        std::env::remove_var(APP_VERSION_VAR);
    }
}
