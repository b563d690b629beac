use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    /// Body of the health check. Uptime monitors only look at the status code.
    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub message: String,
        /// Version of the running server
        pub version: String,
    }

    impl APIResponse {
        pub fn healthy(version: impl Into<String>) -> Self {
            Self {
                message: "Popify is up".into(),
                version: version.into(),
            }
        }
    }
}
