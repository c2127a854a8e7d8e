//! # Dependency Injection
//!
//! The only place that depends on `vt-infra` and `vt-app` together. It
//! assembles adapters behind port traits; it makes no decisions.

use std::sync::Arc;

use anyhow::Context;
use vt_app::{ListNotifications, LoadActions, MarkAllNotificationsRead, MarkNotificationRead};
use vt_core::config::AppConfig;
use vt_core::ports::{ActionsFetchPort, NotificationsPort};
use vt_infra::{ApiClient, HttpActionsRepository, HttpNotificationsRepository};

/// Ports resolved from configuration.
#[derive(Clone)]
pub struct AppDeps {
    pub actions: Arc<dyn ActionsFetchPort>,
    pub notifications: Arc<dyn NotificationsPort>,
}

impl AppDeps {
    pub fn load_actions(&self) -> LoadActions {
        LoadActions::new(self.actions.clone())
    }

    pub fn list_notifications(&self) -> ListNotifications {
        ListNotifications::new(self.notifications.clone())
    }

    pub fn mark_notification_read(&self) -> MarkNotificationRead {
        MarkNotificationRead::new(self.notifications.clone())
    }

    pub fn mark_all_notifications_read(&self) -> MarkAllNotificationsRead {
        MarkAllNotificationsRead::new(self.notifications.clone())
    }
}

pub fn wire_dependencies(config: &AppConfig) -> anyhow::Result<AppDeps> {
    let client = ApiClient::from_config(config).context("Failed to build API client")?;
    tracing::debug!(base_url = client.base_url(), "API client ready");

    Ok(AppDeps {
        actions: Arc::new(HttpActionsRepository::new(client.clone())),
        notifications: Arc::new(HttpNotificationsRepository::new(client)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wiring_requires_base_url() {
        let result = wire_dependencies(&AppConfig::empty());
        assert!(result.is_err());
    }

    #[test]
    fn test_wiring_with_base_url() {
        let config = AppConfig {
            api_base_url: "http://localhost:3000".into(),
            ..AppConfig::empty()
        };
        assert!(wire_dependencies(&config).is_ok());
    }
}
