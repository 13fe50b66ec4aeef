//! Administrator repository.
//!
//! [`AdministratorsRepository`] is the persistence port the handler depends on.
//! [`PgAdministratorsRepository`] is the `PostgreSQL` implementation; every
//! operation issues exactly one statement.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use keyholder_core::{AdministratorId, Email};

use super::RepositoryError;
use crate::models::Administrator;

/// Persistence operations for administrators.
#[async_trait]
pub trait AdministratorsRepository: Send + Sync {
    /// Fetch every stored administrator, in whatever order the store yields.
    async fn get_administrators(&self) -> Result<Vec<Administrator>, RepositoryError>;

    /// Insert one administrator; the store assigns the id.
    ///
    /// Uniqueness of `email` is the store's responsibility.
    async fn add_administrator(&self, email: &Email) -> Result<(), RepositoryError>;

    /// Delete the administrator with the given id.
    ///
    /// Deleting an id that does not exist succeeds without effect.
    async fn remove_administrator(&self, id: &str) -> Result<(), RepositoryError>;

    /// Verify the store answers a trivial query.
    async fn health_check(&self) -> Result<(), RepositoryError>;
}

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` administrator queries.
#[derive(Debug, sqlx::FromRow)]
struct AdministratorRow {
    id: Uuid,
    email: String,
}

impl TryFrom<AdministratorRow> for Administrator {
    type Error = RepositoryError;

    fn try_from(row: AdministratorRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self::new(AdministratorId::new(row.id), email))
    }
}

// =============================================================================
// Repository
// =============================================================================

/// `PostgreSQL`-backed administrator repository.
#[derive(Debug, Clone)]
pub struct PgAdministratorsRepository {
    pool: PgPool,
}

impl PgAdministratorsRepository {
    /// Create a new repository over a connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdministratorsRepository for PgAdministratorsRepository {
    #[instrument(skip(self))]
    async fn get_administrators(&self) -> Result<Vec<Administrator>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdministratorRow>(
            r"
            SELECT id, email
            FROM admin.administrator
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    #[instrument(skip(self, email), fields(email = %email))]
    async fn add_administrator(&self, email: &Email) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO admin.administrator (email)
            VALUES ($1)
            ",
        )
        .bind(email)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_administrator(&self, id: &str) -> Result<(), RepositoryError> {
        // Cast in SQL so malformed ids are rejected by the store itself.
        sqlx::query(
            r"
            DELETE FROM admin.administrator
            WHERE id = $1::uuid
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<(), RepositoryError> {
        let value: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&self.pool)
            .await?;

        if value != 1 {
            return Err(RepositoryError::DataCorruption(format!(
                "health check returned {value}, expected 1"
            )));
        }

        Ok(())
    }
}
