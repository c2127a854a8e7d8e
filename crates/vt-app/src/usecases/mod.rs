//! Business logic use cases
//!
//! ```text
//! LoadActions ──► ActionsBrowser (filter / paginate, local)
//!
//! ListNotifications ──► NotificationInbox
//! MarkNotificationRead / MarkAllNotificationsRead (optimistic, rolled back on failure)
//! ```

pub mod load_actions;
pub mod notifications;

pub use load_actions::LoadActions;
pub use notifications::{ListNotifications, MarkAllNotificationsRead, MarkNotificationRead};
