//! Business logic services for admin.
//!
//! # Services
//!
//! - `administrators` - Administrator listing, invitation and removal

pub mod administrators;

pub use administrators::{AdministratorsError, AdministratorsHandler, ValidationError};
