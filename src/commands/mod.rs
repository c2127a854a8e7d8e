//! CLI command handlers.
//!
//! Each handler returns a serializable DTO; `main` prints it as JSON.

pub mod actions;
pub mod dto;
pub mod masks;
pub mod notifications;

pub use actions::browse_actions;
pub use masks::mask_value;
pub use notifications::run_notifications;
