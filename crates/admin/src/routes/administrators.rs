//! Administrator management API handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use serde::Deserialize;
use tracing::instrument;

use crate::{error::AppError, models::Administrator, state::AppState};

/// Build the administrators router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/administrators", get(list).post(create))
        .route("/api/administrators/{id}", delete(remove))
}

/// Request body for inviting an administrator.
#[derive(Debug, Deserialize)]
pub struct AddAdministratorRequest {
    /// Email to invite. A missing or `null` field is treated as blank.
    #[serde(default)]
    pub email: Option<String>,
}

/// List all administrators.
///
/// # Errors
///
/// Returns `AppError::Database` if the store query fails.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Administrator>>, AppError> {
    let administrators = state.administrators().get_administrators().await?;
    Ok(Json(administrators))
}

/// Invite a single administrator.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a missing or invalid email and
/// `AppError::Database` if the store rejects the insert.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<AddAdministratorRequest>,
) -> Result<StatusCode, AppError> {
    let email = body.email.as_deref().unwrap_or_default();
    state.administrators().add_administrator(email).await?;
    Ok(StatusCode::CREATED)
}

/// Remove an administrator. Unknown ids succeed.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a blank id and `AppError::Database`
/// if the store rejects the delete.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.administrators().remove_administrator(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
