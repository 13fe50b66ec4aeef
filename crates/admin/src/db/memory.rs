//! In-memory administrator store.
//!
//! Keeps administrators in insertion order and enforces email uniqueness the
//! same way the `admin.administrator` table does. Useful for tests and local
//! development without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use keyholder_core::{AdministratorId, Email};

use super::{AdministratorsRepository, RepositoryError};
use crate::models::Administrator;

/// Thread-safe in-memory repository. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAdministratorsRepository {
    administrators: Arc<RwLock<Vec<Administrator>>>,
}

impl InMemoryAdministratorsRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored administrators.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let administrators = self
            .administrators
            .read()
            .map_err(|_| RepositoryError::Unavailable("failed to acquire read lock".to_owned()))?;
        Ok(administrators.len())
    }

    /// Returns `true` when no administrators are stored.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Unavailable` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        self.len().map(|n| n == 0)
    }
}

#[async_trait]
impl AdministratorsRepository for InMemoryAdministratorsRepository {
    async fn get_administrators(&self) -> Result<Vec<Administrator>, RepositoryError> {
        let administrators = self
            .administrators
            .read()
            .map_err(|_| RepositoryError::Unavailable("failed to acquire read lock".to_owned()))?;
        Ok(administrators.clone())
    }

    async fn add_administrator(&self, email: &Email) -> Result<(), RepositoryError> {
        let mut administrators = self
            .administrators
            .write()
            .map_err(|_| RepositoryError::Unavailable("failed to acquire write lock".to_owned()))?;

        if administrators.iter().any(|a| a.email == *email) {
            return Err(RepositoryError::Conflict(format!(
                "email already exists: {email}"
            )));
        }

        administrators.push(Administrator::new(
            AdministratorId::new(Uuid::new_v4()),
            email.clone(),
        ));
        Ok(())
    }

    async fn remove_administrator(&self, id: &str) -> Result<(), RepositoryError> {
        // Same acceptance as the `$1::uuid` cast: any UUID spelling, nothing else.
        let id: AdministratorId = id
            .parse()
            .map_err(|e| RepositoryError::InvalidId(format!("{id}: {e}")))?;

        let mut administrators = self
            .administrators
            .write()
            .map_err(|_| RepositoryError::Unavailable("failed to acquire write lock".to_owned()))?;
        administrators.retain(|a| a.id != id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        self.len().map(|_| ())
    }
}
