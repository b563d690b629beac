use crate::shared::entity::ID;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Purchase,
    Signup,
    Review,
    Custom,
}

impl Default for NotificationKind {
    fn default() -> Self {
        Self::Custom
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum InvalidNotificationError {
    #[error("Notification subject name can not be empty")]
    EmptySubjectName,
}

/// A single "someone just did X" event as shown by the widget.
///
/// Records are immutable once fetched. The relative time label is derived
/// from `occurred_at` each time the record is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub id: ID,
    subject_name: String,
    pub subject_location: Option<String>,
    pub action_verb: String,
    pub action_object: String,
    pub occurred_at: DateTime<Utc>,
}

impl NotificationRecord {
    pub fn new(
        id: ID,
        subject_name: String,
        subject_location: Option<String>,
        action_verb: String,
        action_object: String,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, InvalidNotificationError> {
        if subject_name.trim().is_empty() {
            return Err(InvalidNotificationError::EmptySubjectName);
        }
        Ok(Self {
            id,
            subject_name,
            subject_location: subject_location.filter(|l| !l.trim().is_empty()),
            action_verb,
            action_object,
            occurred_at,
        })
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    /// Uppercased first character of the subject name
    pub fn avatar_initial(&self) -> String {
        self.subject_name
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A notification as stored for a `Site`
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: ID,
    pub site_id: ID,
    pub kind: NotificationKind,
    pub name: String,
    pub location: Option<String>,
    pub action: String,
    pub item: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        site_id: ID,
        kind: NotificationKind,
        name: String,
        action: String,
        item: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            site_id,
            kind,
            name,
            location: None,
            action,
            item,
            created_at,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn record(&self) -> Result<NotificationRecord, InvalidNotificationError> {
        NotificationRecord::new(
            self.id.clone(),
            self.name.clone(),
            self.location.clone(),
            self.action.clone(),
            self.item.clone(),
            self.created_at,
        )
    }
}
