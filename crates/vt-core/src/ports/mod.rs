//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations (REST adapters). The core stays free of I/O.

pub mod actions;
pub mod errors;
pub mod notifications;

pub use actions::ActionsFetchPort;
pub use errors::FetchError;
pub use notifications::NotificationsPort;
