use async_trait::async_trait;
use vt_core::ports::{FetchError, NotificationsPort};
use vt_core::{Notification, NotificationId};

use super::client::ApiClient;
use super::dto::NotificationDto;

pub struct HttpNotificationsRepository {
    client: ApiClient,
}

impl HttpNotificationsRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NotificationsPort for HttpNotificationsRepository {
    async fn list(&self) -> Result<Vec<Notification>, FetchError> {
        let dtos: Vec<NotificationDto> = self.client.get_json("notifications").await?;
        Ok(dtos.into_iter().map(Notification::from).collect())
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<(), FetchError> {
        self.client
            .patch(&format!("notifications/{}/read", id.as_str()))
            .await
    }

    async fn mark_all_read(&self) -> Result<(), FetchError> {
        self.client.patch("notifications/read-all").await
    }
}
