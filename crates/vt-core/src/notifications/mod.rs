//! Notification dropdown state.
//!
//! Delivery happens server-side; the client only lists notifications and
//! flips their read flags optimistically.

mod inbox;
mod model;

pub use inbox::{NotificationInbox, Rollback};
pub use model::Notification;
