use crate::dtos::{NotificationDTO, SiteSettingsDTO};
use popify_domain::{EventKind, Notification, Site};
use serde::{Deserialize, Serialize};

pub mod get_widget_feed {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub key: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub notifications: Vec<NotificationDTO>,
        #[serde(default)]
        pub settings: Option<SiteSettingsDTO>,
    }

    impl APIResponse {
        pub fn new(site: &Site, notifications: Vec<Notification>) -> Self {
            Self {
                notifications: notifications.iter().map(NotificationDTO::new).collect(),
                settings: Some(SiteSettingsDTO::new(&site.settings)),
            }
        }
    }
}

pub mod track_widget_event {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub key: Option<String>,
        #[serde(rename = "type", default)]
        pub kind: Option<EventKind>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
    }
}
