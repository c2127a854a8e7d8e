use async_trait::async_trait;

use crate::ids::NotificationId;
use crate::notifications::Notification;

use super::errors::FetchError;

#[async_trait]
pub trait NotificationsPort: Send + Sync {
    async fn list(&self) -> Result<Vec<Notification>, FetchError>;
    async fn mark_read(&self, id: &NotificationId) -> Result<(), FetchError>;
    async fn mark_all_read(&self) -> Result<(), FetchError>;
}
