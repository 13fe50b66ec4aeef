//! Domain models for admin.

pub mod administrator;

pub use administrator::Administrator;
