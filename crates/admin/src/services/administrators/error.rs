//! Administrator management error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Client input rejected before any store call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Email is empty or whitespace-only.
    #[error("Missing email")]
    MissingEmail,

    /// Email is not a syntactically valid address.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Administrator id is empty or whitespace-only.
    #[error("Missing id")]
    MissingId,
}

/// Errors returned by [`AdministratorsHandler`](super::AdministratorsHandler).
#[derive(Debug, Error)]
pub enum AdministratorsError {
    /// Invalid caller input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store failure, propagated unchanged.
    #[error(transparent)]
    Store(#[from] RepositoryError),
}
