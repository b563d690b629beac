mod base;
mod status;
mod widget;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use popify_api_structs::dtos::*;
pub use popify_domain::{EventKind, NotificationKind, Position, Theme, ID};
use status::StatusClient;
use std::sync::Arc;
use widget::WidgetClient;

/// Popify SDK
///
/// The SDK contains methods for interacting with the Popify server API.
/// `address` is the base url of the api, e.g. `http://localhost:5000/api`.
#[derive(Clone)]
pub struct PopifySDK {
    pub status: StatusClient,
    pub widget: WidgetClient,
}

impl PopifySDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let status = StatusClient::new(base.clone());
        let widget = WidgetClient::new(base);

        Self { status, widget }
    }
}
