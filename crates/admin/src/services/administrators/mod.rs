//! Administrator management.
//!
//! Validates caller input and delegates persistence to an injected
//! [`AdministratorsRepository`]. Administrators are added one at a time:
//! accepting several addresses per call would force partial-failure handling
//! (some inserted, some conflicting), which this service does not do.

mod error;

pub use error::{AdministratorsError, ValidationError};

use std::sync::Arc;

use tracing::instrument;

use keyholder_core::Email;

use crate::db::AdministratorsRepository;
use crate::models::Administrator;

/// Administrator management handler.
///
/// Cheap to clone; clones share the same repository.
#[derive(Clone)]
pub struct AdministratorsHandler {
    repository: Arc<dyn AdministratorsRepository>,
}

impl std::fmt::Debug for AdministratorsHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdministratorsHandler").finish_non_exhaustive()
    }
}

impl AdministratorsHandler {
    /// Create a handler over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn AdministratorsRepository>) -> Self {
        Self { repository }
    }

    /// List every administrator.
    ///
    /// # Errors
    ///
    /// Returns `AdministratorsError::Store` if the store query fails.
    #[instrument(skip(self))]
    pub async fn get_administrators(&self) -> Result<Vec<Administrator>, AdministratorsError> {
        Ok(self.repository.get_administrators().await?)
    }

    /// Invite a new administrator by email.
    ///
    /// Surrounding whitespace is trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingEmail` for blank input and
    /// `ValidationError::InvalidEmail` for malformed addresses, both without
    /// touching the store. Store failures (including duplicate emails) are
    /// returned as `AdministratorsError::Store`.
    #[instrument(skip(self))]
    pub async fn add_administrator(&self, email: &str) -> Result<(), AdministratorsError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail.into());
        }

        let email = Email::parse(email).map_err(|_| ValidationError::InvalidEmail)?;

        // TODO: send an invitation email once SMTP delivery is configured for this service
        self.repository.add_administrator(&email).await?;
        tracing::info!(email = %email, "Administrator added");
        Ok(())
    }

    /// Remove an administrator by id.
    ///
    /// Removing an unknown id succeeds. The id is passed to the store as given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingId` for blank input without touching
    /// the store, and `AdministratorsError::Store` if the store rejects the
    /// delete.
    #[instrument(skip(self))]
    pub async fn remove_administrator(&self, id: &str) -> Result<(), AdministratorsError> {
        if id.trim().is_empty() {
            return Err(ValidationError::MissingId.into());
        }

        self.repository.remove_administrator(id).await?;
        tracing::info!(id = %id, "Administrator removed");
        Ok(())
    }

    /// Check that the backing store is reachable.
    ///
    /// # Errors
    ///
    /// Returns `AdministratorsError::Store` if the store check fails.
    pub async fn health_check(&self) -> Result<(), AdministratorsError> {
        Ok(self.repository.health_check().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::db::{InMemoryAdministratorsRepository, RepositoryError};

    /// Counts store calls and optionally fails every one of them.
    #[derive(Default)]
    struct ProbeRepository {
        calls: AtomicUsize,
        fail: bool,
    }

    impl ProbeRepository {
        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: true,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn record(&self) -> Result<(), RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RepositoryError::Unavailable("connection refused".to_owned()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AdministratorsRepository for ProbeRepository {
        async fn get_administrators(&self) -> Result<Vec<Administrator>, RepositoryError> {
            self.record().map(|()| Vec::new())
        }

        async fn add_administrator(&self, _email: &Email) -> Result<(), RepositoryError> {
            self.record()
        }

        async fn remove_administrator(&self, _id: &str) -> Result<(), RepositoryError> {
            self.record()
        }

        async fn health_check(&self) -> Result<(), RepositoryError> {
            self.record()
        }
    }

    fn in_memory() -> (AdministratorsHandler, InMemoryAdministratorsRepository) {
        let repo = InMemoryAdministratorsRepository::new();
        (AdministratorsHandler::new(Arc::new(repo.clone())), repo)
    }

    fn probe(repo: ProbeRepository) -> (AdministratorsHandler, Arc<ProbeRepository>) {
        let repo = Arc::new(repo);
        (AdministratorsHandler::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_add_trims_and_lists() {
        let (handler, _) = in_memory();

        handler.add_administrator(" a@b.com ").await.unwrap();

        let all = handler.get_administrators().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].email.as_str(), "a@b.com");
        assert!(!all[0].id.is_nil());
    }

    #[tokio::test]
    async fn test_add_blank_email_is_missing() {
        for input in ["", "   ", "\t\n"] {
            let (handler, repo) = probe(ProbeRepository::default());
            let err = handler.add_administrator(input).await.unwrap_err();

            assert!(matches!(
                err,
                AdministratorsError::Validation(ValidationError::MissingEmail)
            ));
            assert_eq!(err.to_string(), "Missing email");
            assert_eq!(repo.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_add_malformed_email_is_invalid() {
        for input in ["not-an-email", "a@b", "a b@c.com", "@b.com", "a@@b.com"] {
            let (handler, repo) = probe(ProbeRepository::default());
            let err = handler.add_administrator(input).await.unwrap_err();

            assert!(matches!(
                err,
                AdministratorsError::Validation(ValidationError::InvalidEmail)
            ));
            assert_eq!(err.to_string(), "Invalid email address");
            assert_eq!(repo.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_add_duplicate_propagates_store_error() {
        let (handler, _) = in_memory();
        handler.add_administrator("a@b.com").await.unwrap();

        let err = handler.add_administrator("  a@b.com").await.unwrap_err();
        assert!(matches!(
            err,
            AdministratorsError::Store(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failures_propagate_unchanged() {
        let (handler, repo) = probe(ProbeRepository::failing());

        let list = handler.get_administrators().await.unwrap_err();
        let add = handler.add_administrator("a@b.com").await.unwrap_err();
        let remove = handler.remove_administrator("some-id").await.unwrap_err();

        for err in [list, add, remove] {
            assert!(matches!(
                err,
                AdministratorsError::Store(RepositoryError::Unavailable(ref msg))
                    if msg == "connection refused"
            ));
        }
        assert_eq!(repo.calls(), 3);
    }

    #[tokio::test]
    async fn test_remove_blank_id_is_missing() {
        for input in ["", "  "] {
            let (handler, repo) = probe(ProbeRepository::default());
            let err = handler.remove_administrator(input).await.unwrap_err();

            assert!(matches!(
                err,
                AdministratorsError::Validation(ValidationError::MissingId)
            ));
            assert_eq!(err.to_string(), "Missing id");
            assert_eq!(repo.calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_remove_unknown_id_leaves_store_unchanged() {
        let (handler, repo) = in_memory();
        handler.add_administrator("a@b.com").await.unwrap();
        let before = handler.get_administrators().await.unwrap();

        handler
            .remove_administrator("67e55044-10b1-426f-9247-bb680e5fe0c8")
            .await
            .unwrap();

        assert_eq!(handler.get_administrators().await.unwrap(), before);
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (handler, _) = in_memory();
        handler.add_administrator("a@b.com").await.unwrap();
        handler.add_administrator("c@d.com").await.unwrap();

        let all = handler.get_administrators().await.unwrap();
        let id = all[0].id.to_string();

        handler.remove_administrator(&id).await.unwrap();
        handler.remove_administrator(&id).await.unwrap();

        let remaining = handler.get_administrators().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining.iter().all(|a| a.id.to_string() != id));
    }

    #[tokio::test]
    async fn test_list_is_pure_delegation() {
        let (handler, repo) = probe(ProbeRepository::default());
        assert!(handler.get_administrators().await.unwrap().is_empty());
        assert_eq!(repo.calls(), 1);
    }

    #[tokio::test]
    async fn test_health_check_delegates() {
        let (handler, _) = in_memory();
        handler.health_check().await.unwrap();

        let (failing, _) = probe(ProbeRepository::failing());
        assert!(failing.health_check().await.is_err());
    }
}
