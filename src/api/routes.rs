//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{healthz, version};

/// Create the API router.
///
/// Anything outside the two declared routes gets axum's default answer
/// (404 for an unknown path, 405 for a wrong method on a known path).
pub fn create_router() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/version", get(version))
        .layer(TraceLayer::new_for_http())
}
