//! REST adapters.

mod actions;
mod client;
mod dto;
mod notifications;

pub use actions::HttpActionsRepository;
pub use client::{ApiClient, DEFAULT_TIMEOUT};
pub use notifications::HttpNotificationsRepository;
