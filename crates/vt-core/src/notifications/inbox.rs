use crate::ids::NotificationId;

use super::model::Notification;

/// Local copy of the user's notifications, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationInbox {
    items: Vec<Notification>,
}

/// Previous read flags captured before an optimistic update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a rollback must be applied or dropped explicitly once the server answers"]
pub struct Rollback {
    previous: Vec<(NotificationId, bool)>,
}

impl NotificationInbox {
    pub fn new(mut items: Vec<Notification>) -> Self {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Marks one notification read. `None` when it is unknown or already read.
    pub fn apply_mark_read(&mut self, id: &NotificationId) -> Option<Rollback> {
        let item = self.items.iter_mut().find(|n| &n.id == id && !n.read)?;
        item.read = true;
        Some(Rollback {
            previous: vec![(id.clone(), false)],
        })
    }

    pub fn apply_mark_all_read(&mut self) -> Rollback {
        let previous = self
            .items
            .iter_mut()
            .filter(|n| !n.read)
            .map(|n| {
                n.read = true;
                (n.id.clone(), false)
            })
            .collect();
        Rollback { previous }
    }

    pub fn rollback(&mut self, rollback: Rollback) {
        for (id, read) in rollback.previous {
            if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
                item.read = read;
            }
        }
    }
}

impl Rollback {
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn notification(id: &str, minute: u32, read: bool) -> Notification {
        Notification {
            id: NotificationId::from(id),
            message: format!("mensagem {id}"),
            read,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
            link: None,
        }
    }

    fn inbox() -> NotificationInbox {
        NotificationInbox::new(vec![
            notification("a", 1, false),
            notification("b", 3, true),
            notification("c", 2, false),
        ])
    }

    #[test]
    fn test_items_are_newest_first() {
        let inbox = inbox();
        let ids: Vec<&str> = inbox.items().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_mark_read_and_rollback() {
        let mut inbox = inbox();
        let rollback = inbox.apply_mark_read(&NotificationId::from("a")).unwrap();
        assert_eq!(inbox.unread_count(), 1);

        inbox.rollback(rollback);
        assert_eq!(inbox.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_on_read_or_unknown_is_none() {
        let mut inbox = inbox();
        assert!(inbox.apply_mark_read(&NotificationId::from("b")).is_none());
        assert!(inbox.apply_mark_read(&NotificationId::from("zzz")).is_none());
    }

    #[test]
    fn test_mark_all_read_rollback_restores_only_changed() {
        let mut inbox = inbox();
        let rollback = inbox.apply_mark_all_read();
        assert_eq!(inbox.unread_count(), 0);

        inbox.rollback(rollback);
        assert_eq!(inbox.unread_count(), 2);
        assert!(inbox.items().iter().find(|n| n.id.as_str() == "b").unwrap().read);
    }
}
