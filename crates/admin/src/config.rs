//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_DB_MAX_CONNECTIONS` - Pool size upper bound (default: 10)
//! - `ADMIN_DB_MIN_CONNECTIONS` - Idle connections kept open (default: 2)
//! - `ADMIN_DB_ACQUIRE_TIMEOUT_SECS` - Wait for a pooled connection (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// `PostgreSQL` connection pool settings.
///
/// Implements `Debug` manually to redact the connection string.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// Connection URL (contains password)
    pub url: SecretString,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// Minimum idle connections
    pub min_connections: u32,
    /// How long to wait for a pooled connection
    pub acquire_timeout: Duration,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Pool settings with the default sizing for `url`.
    #[must_use]
    pub const fn new(url: SecretString) -> Self {
        Self {
            url,
            max_connections: 10,
            min_connections: 2,
            acquire_timeout: Duration::from_secs(10),
        }
    }

    /// Load database settings from environment.
    ///
    /// Does not read `.env`; [`AdminConfig::from_env`] does that first.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is missing or a numeric setting is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::new(get_database_url("ADMIN_DATABASE_URL")?);

        let max_connections = get_parsed_or(
            "ADMIN_DB_MAX_CONNECTIONS",
            defaults.max_connections,
        )?;
        let min_connections = get_parsed_or(
            "ADMIN_DB_MIN_CONNECTIONS",
            defaults.min_connections,
        )?;
        if min_connections > max_connections {
            return Err(ConfigError::InvalidEnvVar(
                "ADMIN_DB_MIN_CONNECTIONS".to_string(),
                format!("must not exceed ADMIN_DB_MAX_CONNECTIONS ({max_connections})"),
            ));
        }
        let acquire_timeout_secs = get_parsed_or(
            "ADMIN_DB_ACQUIRE_TIMEOUT_SECS",
            defaults.acquire_timeout.as_secs(),
        )?;

        Ok(Self {
            max_connections,
            min_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            ..defaults
        })
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database = DatabaseConfig::from_env()?;
        let host = get_parsed_or("ADMIN_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = get_parsed_or("ADMIN_PORT", 3001_u16)?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            database,
            host,
            port,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (used by Fly.io postgres attach).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an environment variable, falling back to `default` when unset.
fn get_parsed_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |raw| parse_value(key, &raw))
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
