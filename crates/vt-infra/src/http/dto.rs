//! Wire shapes of the backend. Converted into core types at the adapter edge.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use vt_core::{ActionId, ActionLocation, ActionRecord, Notification, NotificationId};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ActionDto {
    #[serde(default, alias = "_id")]
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    area: Option<String>,
    #[serde(default)]
    location: Option<LocationDto>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, alias = "ngo")]
    organization: Option<OrganizationDto>,
    #[serde(default, alias = "image")]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LocationDto {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

/// The organization is sent either as a bare name or as a populated document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OrganizationDto {
    Name(String),
    Document { name: String },
}

impl From<ActionDto> for ActionRecord {
    fn from(dto: ActionDto) -> Self {
        ActionRecord {
            id: dto.id.map(ActionId::from),
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            area: dto.area.unwrap_or_default(),
            location: dto.location.map(|l| ActionLocation {
                city: l.city.unwrap_or_default(),
                state: l.state.unwrap_or_default(),
            }),
            date: dto.date,
            organization: dto.organization.map(|o| match o {
                OrganizationDto::Name(name) | OrganizationDto::Document { name } => name,
            }),
            image_url: dto.image_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NotificationDto {
    #[serde(alias = "_id")]
    id: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    read: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    link: Option<String>,
}

impl From<NotificationDto> for Notification {
    fn from(dto: NotificationDto) -> Self {
        Notification {
            id: NotificationId::from(dto.id),
            message: dto.message,
            read: dto.read,
            created_at: dto.created_at,
            link: dto.link,
        }
    }
}
