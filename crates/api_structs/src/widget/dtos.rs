use chrono::{DateTime, Utc};
use popify_domain::{
    DisplayConfigOverride, InvalidNotificationError, Notification, NotificationKind,
    NotificationRecord, Position, SiteSettings, Theme, ID,
};
use serde::{Deserialize, Serialize};

/// Field names follow the row layout the embedded widget has always consumed,
/// hence no camelCase renaming here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NotificationDTO {
    pub id: ID,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    pub action: String,
    pub item: String,
    pub created_at: DateTime<Utc>,
}

impl NotificationDTO {
    pub fn new(notification: &Notification) -> Self {
        Self {
            id: notification.id.clone(),
            kind: notification.kind,
            name: notification.name.clone(),
            location: notification.location.clone(),
            action: notification.action.clone(),
            item: notification.item.clone(),
            created_at: notification.created_at,
        }
    }

    pub fn into_record(self) -> Result<NotificationRecord, InvalidNotificationError> {
        NotificationRecord::new(
            self.id,
            self.name,
            self.location,
            self.action,
            self.item,
            self.created_at,
        )
    }
}

/// Every field is optional so that partial settings objects are accepted
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsDTO {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub show_avatar: Option<bool>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub delay: Option<u64>,
}

impl SiteSettingsDTO {
    pub fn new(settings: &SiteSettings) -> Self {
        Self {
            position: Some(settings.position),
            theme: Some(settings.theme),
            show_avatar: Some(settings.show_avatar),
            duration: Some(settings.duration),
            delay: Some(settings.delay),
        }
    }

    pub fn to_override(&self) -> DisplayConfigOverride {
        DisplayConfigOverride {
            position: self.position,
            theme: self.theme,
            show_avatar: self.show_avatar,
            visible_duration_ms: self.duration,
            inter_notification_delay_ms: self.delay,
        }
    }
}
