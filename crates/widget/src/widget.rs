use crate::{
    error::ConfigurationError,
    feed::{FeedClient, HttpFeedClient},
    presentation::PresentationAdapter,
    reporter::{EventReporter, HttpEventReporter},
    scheduler::{DisplayScheduler, SchedulerEvent},
    timer::Timers,
};
use popify_domain::{AccessKey, DisplayConfig};
use popify_sdk::PopifySDK;
use popify_utils::{ISys, RealSys};
use std::sync::Arc;
use tracing::warn;

/// The collaborators a widget instance is built from
#[derive(Clone)]
pub struct WidgetContext {
    pub feed: Arc<dyn FeedClient>,
    pub reporter: Arc<dyn EventReporter>,
    pub sys: Arc<dyn ISys>,
    /// Config used before the feed settings are merged in
    pub defaults: DisplayConfig,
}

impl WidgetContext {
    /// Context talking to the Popify api at `api_url`
    pub fn create(api_url: impl Into<String>) -> Self {
        let sdk = PopifySDK::new(api_url);
        Self {
            feed: Arc::new(HttpFeedClient::new(sdk.clone())),
            reporter: Arc::new(HttpEventReporter::new(sdk)),
            sys: Arc::new(RealSys {}),
            defaults: DisplayConfig::default(),
        }
    }
}

/// Builds and starts a widget instance.
///
/// Fetches the feed once, merges its settings into the default config, hands
/// the final config to the adapter and starts the rotation. A failed fetch
/// yields a scheduler that stays idle forever.
pub async fn init_widget<A, T>(
    key: Option<&str>,
    ctx: &WidgetContext,
    mut adapter: A,
    timers: T,
) -> Result<DisplayScheduler<A, T>, ConfigurationError>
where
    A: PresentationAdapter,
    T: Timers,
{
    let key = match AccessKey::parse(key) {
        Some(key) => key,
        None => {
            warn!("{}", ConfigurationError::MissingAccessKey);
            return Err(ConfigurationError::MissingAccessKey);
        }
    };

    let feed = ctx
        .feed
        .fetch_feed(&key, ctx.defaults.max_queue_size)
        .await;
    let config = match &feed.config_override {
        Some(overrides) => ctx.defaults.clone().merge(overrides),
        None => ctx.defaults.clone(),
    };
    adapter.configure(&config);

    let mut scheduler = DisplayScheduler::new(
        key,
        config,
        feed.records,
        adapter,
        timers,
        ctx.reporter.clone(),
        ctx.sys.clone(),
    );
    scheduler.advance(SchedulerEvent::Start);
    Ok(scheduler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::FetchError,
        feed::Feed,
        presentation::MarkupAdapter,
        reporter::InMemoryEventReporter,
        scheduler::Phase,
        timer::ManualTimers,
    };
    use chrono::Utc;
    use popify_domain::{
        DisplayConfigOverride, EventKind, Locale, NotificationRecord, Position, ID,
    };

    struct FixtureFeedClient {
        records: usize,
        config_override: Option<DisplayConfigOverride>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl FeedClient for FixtureFeedClient {
        async fn fetch(&self, _key: &AccessKey) -> Result<Feed, FetchError> {
            if self.fail {
                return Err(FetchError::Network);
            }
            let records = (0..self.records)
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
                .collect();
            Ok(Feed {
                records,
                config_override: self.config_override.clone(),
            })
        }
    }

    fn context(
        feed: FixtureFeedClient,
        timers: &ManualTimers,
    ) -> (WidgetContext, Arc<InMemoryEventReporter>) {
        let reporter = Arc::new(InMemoryEventReporter::new());
        let ctx = WidgetContext {
            feed: Arc::new(feed),
            reporter: reporter.clone(),
            sys: Arc::new(timers.clone()),
            defaults: DisplayConfig::default(),
        };
        (ctx, reporter)
    }

    #[tokio::test]
    async fn missing_key_refuses_to_start() {
        let timers = ManualTimers::new(0);
        let (ctx, _) = context(
            FixtureFeedClient {
                records: 3,
                config_override: None,
                fail: false,
            },
            &timers,
        );
        for key in [None, Some(""), Some("  ")] {
            let res =
                init_widget(key, &ctx, MarkupAdapter::new(Locale::En), timers.clone()).await;
            assert_eq!(res.err(), Some(ConfigurationError::MissingAccessKey));
        }
        assert_eq!(timers.pending_count(), 0);
    }

    #[tokio::test]
    async fn feed_settings_override_defaults_once() {
        let timers = ManualTimers::new(0);
        let (ctx, reporter) = context(
            FixtureFeedClient {
                records: 8,
                config_override: Some(DisplayConfigOverride {
                    position: Some(Position::TopRight),
                    inter_notification_delay_ms: Some(1000),
                    visible_duration_ms: Some(2000),
                    ..Default::default()
                }),
                fail: false,
            },
            &timers,
        );
        let mut scheduler = init_widget(
            Some("pk_test"),
            &ctx,
            MarkupAdapter::new(Locale::En),
            timers.clone(),
        )
        .await
        .unwrap();

        assert_eq!(scheduler.phase(), Phase::WaitingInitial);
        assert_eq!(scheduler.state().queue().len(), 5);
        assert_eq!(scheduler.config().position, Position::TopRight);
        assert_eq!(scheduler.adapter().container().position, Position::TopRight);

        scheduler.run_until(1000);
        assert_eq!(scheduler.phase(), Phase::Showing);
        assert_eq!(reporter.count(EventKind::Impression), 1);
        scheduler.run_until(3000);
        assert_eq!(scheduler.phase(), Phase::Hiding);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_widget_idle() {
        let timers = ManualTimers::new(0);
        let (ctx, reporter) = context(
            FixtureFeedClient {
                records: 3,
                config_override: None,
                fail: true,
            },
            &timers,
        );
        let mut scheduler = init_widget(
            Some("pk_test"),
            &ctx,
            MarkupAdapter::new(Locale::En),
            timers.clone(),
        )
        .await
        .unwrap();

        assert_eq!(scheduler.phase(), Phase::Idle);
        assert_eq!(timers.pending_count(), 0);
        scheduler.run_until(120_000);
        assert_eq!(scheduler.phase(), Phase::Idle);
        assert!(reporter.reports().is_empty());
        assert_eq!(scheduler.config(), &DisplayConfig::default());
    }
}
