use serde::{Deserialize, Serialize};

use crate::ids::ActionId;

/// A social action as delivered by the backend. Read-only on the client.
///
/// Missing text fields default to empty strings; a missing `location` or
/// `date` stays `None` and simply fails any criterion that references it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(default)]
    pub id: Option<ActionId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub location: Option<ActionLocation>,
    /// ISO-8601 date or date-time.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl ActionRecord {
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.city.as_str())
    }

    pub fn state(&self) -> Option<&str> {
        self.location.as_ref().map(|l| l.state.as_str())
    }

    /// Calendar-date part (`YYYY-MM-DD`) of `date`.
    pub fn calendar_date(&self) -> Option<&str> {
        self.date.as_deref().map(calendar_prefix)
    }
}

pub(crate) fn calendar_prefix(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}
