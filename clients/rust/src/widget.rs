use crate::{APIResponse, BaseClient};
use popify_api_structs::*;
use popify_domain::EventKind;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct WidgetClient {
    base: Arc<BaseClient>,
}

impl WidgetClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Fetches the notifications and settings of the `Site` owning `key`
    pub async fn feed(&self, key: &str) -> APIResponse<get_widget_feed::APIResponse> {
        let query = get_widget_feed::QueryParams {
            key: Some(key.to_string()),
        };
        self.base.get("widget".into(), &query, StatusCode::OK).await
    }

    pub async fn track(
        &self,
        key: &str,
        kind: EventKind,
    ) -> APIResponse<track_widget_event::APIResponse> {
        let body = track_widget_event::RequestBody {
            key: Some(key.to_string()),
            kind: Some(kind),
        };
        self.base
            .post(body, "widget/track".into(), StatusCode::OK)
            .await
    }
}
