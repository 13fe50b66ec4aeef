//! Health check handlers.

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::state::AppState;

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies the administrators store answers before returning OK.
/// Returns 503 Service Unavailable if it does not.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.administrators().health_check().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
