//! Notification dropdown use cases
//!
//! Read flags are flipped locally before the request goes out, so the badge
//! updates immediately. A failed request restores the previous flags.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn, Instrument};
use vt_core::ports::NotificationsPort;
use vt_core::{NotificationId, NotificationInbox};

pub struct ListNotifications {
    port: Arc<dyn NotificationsPort>,
}

impl ListNotifications {
    pub fn new(port: Arc<dyn NotificationsPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self) -> Result<NotificationInbox> {
        let span = info_span!("usecase.list_notifications.execute");

        async {
            let items = self
                .port
                .list()
                .await
                .context("Failed to list notifications")?;
            let inbox = NotificationInbox::new(items);
            info!(unread = inbox.unread_count(), "Notifications listed");
            Ok(inbox)
        }
        .instrument(span)
        .await
    }
}

pub struct MarkNotificationRead {
    port: Arc<dyn NotificationsPort>,
}

impl MarkNotificationRead {
    pub fn new(port: Arc<dyn NotificationsPort>) -> Self {
        Self { port }
    }

    /// Returns `Ok(false)` when there was nothing to mark (unknown or already read).
    pub async fn execute(&self, inbox: &mut NotificationInbox, id: &NotificationId) -> Result<bool> {
        let span = info_span!("usecase.mark_notification_read.execute", id = %id);

        async {
            let Some(rollback) = inbox.apply_mark_read(id) else {
                return Ok(false);
            };

            if let Err(e) = self.port.mark_read(id).await {
                warn!(error = %e, "Mark read failed, rolling back");
                inbox.rollback(rollback);
                return Err(e).context("Failed to mark notification as read");
            }

            drop(rollback);
            Ok(true)
        }
        .instrument(span)
        .await
    }
}

pub struct MarkAllNotificationsRead {
    port: Arc<dyn NotificationsPort>,
}

impl MarkAllNotificationsRead {
    pub fn new(port: Arc<dyn NotificationsPort>) -> Self {
        Self { port }
    }

    pub async fn execute(&self, inbox: &mut NotificationInbox) -> Result<()> {
        let span = info_span!("usecase.mark_all_notifications_read.execute");

        async {
            let rollback = inbox.apply_mark_all_read();
            if rollback.is_empty() {
                return Ok(());
            }

            if let Err(e) = self.port.mark_all_read().await {
                warn!(error = %e, "Mark all read failed, rolling back");
                inbox.rollback(rollback);
                return Err(e).context("Failed to mark notifications as read");
            }

            drop(rollback);
            Ok(())
        }
        .instrument(span)
        .await
    }
}
