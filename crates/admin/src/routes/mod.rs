//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                    - Liveness check
//! GET    /health/ready              - Readiness check (store reachable)
//!
//! # Administrators
//! GET    /api/administrators        - List administrators
//! POST   /api/administrators        - Invite one administrator ({"email": "..."})
//! DELETE /api/administrators/{id}   - Remove administrator (no-op if unknown)
//! ```

pub mod administrators;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(administrators::router())
}
