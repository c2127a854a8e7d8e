//! Infrastructure adapters for Voluntar.
//!
//! Implements the `vt-core` ports against the backend REST API.

pub mod http;

pub use http::{ApiClient, HttpActionsRepository, HttpNotificationsRepository};
