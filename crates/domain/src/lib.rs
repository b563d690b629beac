mod analytics;
mod display;
mod notification;
mod shared;
mod site;
mod time_ago;

pub use analytics::{DailyAnalytics, EventKind};
pub use display::{DisplayConfig, DisplayConfigOverride, Position, Theme};
pub use notification::{
    InvalidNotificationError, Notification, NotificationKind, NotificationRecord,
};
pub use shared::entity::{InvalidIDError, ID};
pub use site::{AccessKey, Site, SiteSettings};
pub use time_ago::{time_ago, Locale};
