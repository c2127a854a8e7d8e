use anyhow::Result;
use vt_core::NotificationId;

use crate::bootstrap::AppDeps;
use crate::cli::NotificationsCommand;

use super::dto::NotificationsOutput;

/// Every subcommand ends by reporting the resulting local inbox.
pub async fn run_notifications(
    deps: &AppDeps,
    command: &NotificationsCommand,
) -> Result<NotificationsOutput> {
    let mut inbox = deps.list_notifications().execute().await?;

    match command {
        NotificationsCommand::List => {}
        NotificationsCommand::Read { id } => {
            let id = NotificationId::from(id.as_str());
            if !deps.mark_notification_read().execute(&mut inbox, &id).await? {
                tracing::info!(%id, "Notification already read or unknown");
            }
        }
        NotificationsCommand::ReadAll => {
            deps.mark_all_notifications_read()
                .execute(&mut inbox)
                .await?;
        }
    }

    Ok(NotificationsOutput {
        unread: inbox.unread_count(),
        items: inbox.items().to_vec(),
    })
}
