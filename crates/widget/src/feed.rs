use crate::error::FetchError;
use popify_domain::{AccessKey, DisplayConfigOverride, NotificationRecord};
use popify_sdk::PopifySDK;
use tracing::warn;

/// What a single feed retrieval produced
#[derive(Debug, Clone, Default)]
pub struct Feed {
    /// In feed order, newest first
    pub records: Vec<NotificationRecord>,
    pub config_override: Option<DisplayConfigOverride>,
}

#[async_trait::async_trait]
pub trait FeedClient: Send + Sync {
    /// Performs one retrieval of the feed owned by `key`
    async fn fetch(&self, key: &AccessKey) -> Result<Feed, FetchError>;

    /// Like `fetch` but never fails: any error degrades to an empty feed
    /// without override. Keeps at most `max_queue_size` records, in feed order.
    async fn fetch_feed(&self, key: &AccessKey, max_queue_size: usize) -> Feed {
        match self.fetch(key).await {
            Ok(mut feed) => {
                feed.records.truncate(max_queue_size);
                feed
            }
            Err(e) => {
                warn!("Popify: Failed to fetch notifications: {}", e);
                Feed::default()
            }
        }
    }
}

/// Fetches the feed from the Popify api
pub struct HttpFeedClient {
    sdk: PopifySDK,
}

impl HttpFeedClient {
    pub fn new(sdk: PopifySDK) -> Self {
        Self { sdk }
    }
}

#[async_trait::async_trait]
impl FeedClient for HttpFeedClient {
    async fn fetch(&self, key: &AccessKey) -> Result<Feed, FetchError> {
        let res = self.sdk.widget.feed(key.as_str()).await?;

        let records = res
            .notifications
            .into_iter()
            .filter_map(|dto| match dto.into_record() {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Popify: Skipping invalid notification: {}", e);
                    None
                }
            })
            .collect();

        Ok(Feed {
            records,
            config_override: res.settings.map(|settings| settings.to_override()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use popify_domain::{Position, ID};

    struct StaticFeedClient {
        result: fn() -> Result<Feed, FetchError>,
    }

    #[async_trait::async_trait]
    impl FeedClient for StaticFeedClient {
        async fn fetch(&self, _key: &AccessKey) -> Result<Feed, FetchError> {
            (self.result)()
        }
    }

    fn records(count: usize) -> Vec<NotificationRecord> {
        (0..count)
            .map(|i| {
                NotificationRecord::new(
                    ID::new(),
                    format!("Buyer {}", i),
                    None,
                    "purchased".into(),
                    "Pro plan".into(),
                    Utc::now(),
                )
                .unwrap()
            })
            .collect()
    }

    fn key() -> AccessKey {
        AccessKey::parse(Some("pk_test")).unwrap()
    }

    #[tokio::test]
    async fn truncates_preserving_order() {
        let client = StaticFeedClient {
            result: || {
                Ok(Feed {
                    records: records(8),
                    config_override: Some(DisplayConfigOverride {
                        position: Some(Position::TopLeft),
                        ..Default::default()
                    }),
                })
            },
        };
        let feed = client.fetch_feed(&key(), 5).await;
        let names = feed
            .records
            .iter()
            .map(|r| r.subject_name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Buyer 0", "Buyer 1", "Buyer 2", "Buyer 3", "Buyer 4"]
        );
        assert_eq!(
            feed.config_override.unwrap().position,
            Some(Position::TopLeft)
        );
    }

    #[tokio::test]
    async fn failures_degrade_to_empty_feed() {
        for result in [
            (|| Err(FetchError::Network)) as fn() -> Result<Feed, FetchError>,
            || Err(FetchError::MalformedResponse),
            || Err(FetchError::UnexpectedStatus(401)),
        ] {
            let client = StaticFeedClient { result };
            let feed = client.fetch_feed(&key(), 5).await;
            assert!(feed.records.is_empty());
            assert!(feed.config_override.is_none());
        }
    }

    #[tokio::test]
    async fn unreachable_server_gives_empty_feed() {
        let client = HttpFeedClient::new(PopifySDK::new("http://127.0.0.1:9/api"));
        let feed = client.fetch_feed(&key(), 5).await;
        assert!(feed.records.is_empty());
        assert!(feed.config_override.is_none());
    }
}
