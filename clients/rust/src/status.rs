use crate::{APIResponse, BaseClient};
use popify_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check_health(&self) -> APIResponse<get_service_health::APIResponse> {
        let no_query: &[(&str, &str)] = &[];
        self.base.get("".into(), &no_query, StatusCode::OK).await
    }
}
