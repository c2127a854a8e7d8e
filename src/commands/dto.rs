//! Output shapes of the CLI commands.

use serde::Serialize;
use vt_core::{ActionRecord, FilterOptions, MaskKind, Notification, ValidityHint};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MaskOutput {
    pub kind: MaskKind,
    pub canonical: String,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<ValidityHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint_label: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ActionsPage {
    pub total: usize,
    pub matched: usize,
    /// 1-based, `0` when there are no slides.
    pub slide: usize,
    pub slide_count: usize,
    pub cards_per_view: usize,
    pub actions: Vec<ActionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ActionsOutput {
    Page(ActionsPage),
    Options(FilterOptions),
}

#[derive(Debug, Serialize)]
pub struct NotificationsOutput {
    pub unread: usize,
    pub items: Vec<Notification>,
}
