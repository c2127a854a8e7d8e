//! Voluntar Application Orchestration Layer
//!
//! This crate contains the use cases and the stateful sessions that sit
//! between the pure core and the adapters.

pub mod browser;
pub mod usecases;
pub mod viewport;

pub use browser::{ActionsBrowser, ActionsView};
pub use usecases::{
    ListNotifications, LoadActions, MarkAllNotificationsRead, MarkNotificationRead,
};
pub use viewport::{ViewportHub, ViewportSubscription};
