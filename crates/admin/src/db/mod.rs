//! Database operations for the administrators store.
//!
//! # Tables
//!
//! - `admin.administrator` - Administrator accounts (`id` UUID, unique `email`)
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p keyholder-cli -- migrate
//! ```

pub mod administrators;
pub mod memory;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use secrecy::ExposeSecret;

use crate::config::DatabaseConfig;

pub use administrators::{AdministratorsRepository, PgAdministratorsRepository};
pub use memory::InMemoryAdministratorsRepository;

/// Errors raised by a backing store.
///
/// Repositories hand these back untouched; nothing between the store and the
/// HTTP boundary retries or reclassifies them.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx (connectivity, constraint violation, timeout).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// The id is not a UUID the store can look up.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Create a `PostgreSQL` connection pool from the database configuration.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(config.url.expose_secret())
        .await
}
