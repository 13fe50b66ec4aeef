//! CLI subcommands.

pub mod administrators;
pub mod migrate;

use thiserror::Error;

use keyholder_admin::config::ConfigError;
use keyholder_admin::services::AdministratorsError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Administrator operation rejected or failed.
    #[error("{0}")]
    Administrators(#[from] AdministratorsError),
}

/// Connect to the admin database using environment configuration.
pub(crate) async fn connect() -> Result<sqlx::PgPool, CommandError> {
    dotenvy::dotenv().ok();

    let config = keyholder_admin::config::DatabaseConfig::from_env()?;

    tracing::info!("Connecting to admin database...");
    Ok(keyholder_admin::db::create_pool(&config).await?)
}
