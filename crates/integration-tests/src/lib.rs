//! Integration tests for Keyholder.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p keyholder-integration-tests
//! ```
//!
//! The router is driven in-process with [`tower::ServiceExt::oneshot`]; no
//! network listener or database is needed. [`TestContext`] wires the real
//! handler to an [`InMemoryAdministratorsRepository`], or to any other
//! repository passed in.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;

use keyholder_admin::db::{AdministratorsRepository, InMemoryAdministratorsRepository};
use keyholder_admin::routes;
use keyholder_admin::state::AppState;

/// A response captured from the router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", self.body))
    }
}

/// In-process application under test.
pub struct TestContext {
    app: Router,
    /// Store backing the app, when it is the in-memory one.
    pub store: Option<InMemoryAdministratorsRepository>,
}

impl TestContext {
    /// App backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryAdministratorsRepository::new();
        let mut ctx = Self::with_repository(Arc::new(store.clone()));
        ctx.store = Some(store);
        ctx
    }

    /// App backed by the given repository.
    #[must_use]
    pub fn with_repository(repository: Arc<dyn AdministratorsRepository>) -> Self {
        let app = routes::routes().with_state(AppState::with_repository(repository));
        Self { app, store: None }
    }

    /// Send a request and collect the response.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn request(&self, method: Method, uri: &str, json: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match json {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_owned())
            }
            None => Body::empty(),
        };
        let request = builder
            .body(body)
            .unwrap_or_else(|e| panic!("invalid request: {e}"));

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .unwrap_or_else(|e| match e {});

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|e| panic!("failed to read body: {e}"));

        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// `GET /api/administrators`.
    pub async fn list(&self) -> TestResponse {
        self.request(Method::GET, "/api/administrators", None).await
    }

    /// `POST /api/administrators` with the given email.
    pub async fn add(&self, email: &str) -> TestResponse {
        let body = serde_json::json!({ "email": email }).to_string();
        self.request(Method::POST, "/api/administrators", Some(&body))
            .await
    }

    /// `DELETE /api/administrators/{id}`.
    pub async fn remove(&self, id: &str) -> TestResponse {
        self.request(Method::DELETE, &format!("/api/administrators/{id}"), None)
            .await
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
