//! Keyholder Admin library.
//!
//! Administrator management (list, invite, remove) exposed as a library so the
//! HTTP binary, the CLI and the integration tests share one implementation.
//!
//! # Layers
//!
//! - [`services::AdministratorsHandler`] validates input and orchestrates
//! - [`db::AdministratorsRepository`] persists; `PostgreSQL` and in-memory
//!   implementations are provided
//! - [`routes`] maps HTTP requests onto the handler

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
