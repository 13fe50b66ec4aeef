//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::AdministratorsRepository;
use crate::services::AdministratorsHandler;

/// Application state shared across all route handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    administrators: AdministratorsHandler,
}

impl AppState {
    /// Build state from an already-wired handler.
    #[must_use]
    pub fn new(administrators: AdministratorsHandler) -> Self {
        Self {
            inner: Arc::new(AppStateInner { administrators }),
        }
    }

    /// Build state by injecting a repository into a fresh handler.
    #[must_use]
    pub fn with_repository(repository: Arc<dyn AdministratorsRepository>) -> Self {
        Self::new(AdministratorsHandler::new(repository))
    }

    /// Administrator management handler.
    #[must_use]
    pub fn administrators(&self) -> &AdministratorsHandler {
        &self.inner.administrators
    }
}
