use serde::{Deserialize, Serialize};
use std::{fmt::Display, time::Duration};

/// Corner of the host page where the notification container is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::BottomLeft
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

/// How the widget presents and paces notifications.
///
/// A `DisplayConfig` starts out as `DisplayConfig::default()` and is merged with
/// the settings returned by the feed exactly once, before the rotation starts.
/// The scheduler takes it by value afterwards, so it cannot change for the
/// rest of the widget lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub position: Position,
    pub theme: Theme,
    pub show_avatar: bool,
    /// How long a notification stays on screen
    pub visible_duration_ms: u64,
    /// Gap between one notification leaving and the next one showing.
    /// Also used as the delay before the very first notification.
    pub inter_notification_delay_ms: u64,
    /// Cap on how many records are kept from the feed
    pub max_queue_size: usize,
}

impl DisplayConfig {
    pub fn visible_duration(&self) -> Duration {
        Duration::from_millis(self.visible_duration_ms)
    }

    pub fn inter_notification_delay(&self) -> Duration {
        Duration::from_millis(self.inter_notification_delay_ms)
    }

    /// Consumes the config and returns it with every field present in
    /// `overrides` replaced.
    pub fn merge(mut self, overrides: &DisplayConfigOverride) -> Self {
        if let Some(position) = overrides.position {
            self.position = position;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(show_avatar) = overrides.show_avatar {
            self.show_avatar = show_avatar;
        }
        if let Some(duration) = overrides.visible_duration_ms {
            self.visible_duration_ms = duration;
        }
        if let Some(delay) = overrides.inter_notification_delay_ms {
            self.inter_notification_delay_ms = delay;
        }
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            theme: Theme::default(),
            show_avatar: true,
            visible_duration_ms: 5000,
            inter_notification_delay_ms: 3000,
            max_queue_size: 5,
        }
    }
}

/// Partial `DisplayConfig` as supplied by the feed settings object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayConfigOverride {
    pub position: Option<Position>,
    pub theme: Option<Theme>,
    pub show_avatar: Option<bool>,
    pub visible_duration_ms: Option<u64>,
    pub inter_notification_delay_ms: Option<u64>,
}
