mod inmemory;

use chrono::NaiveDate;
pub use inmemory::InMemoryAnalyticsRepo;
use popify_domain::{DailyAnalytics, EventKind, ID};

#[async_trait::async_trait]
pub trait IAnalyticsRepo: Send + Sync {
    /// Bumps the counter for `kind` on the row of `site_id` and `date`,
    /// creating the row when it does not exist yet.
    async fn increment(
        &self,
        site_id: &ID,
        date: NaiveDate,
        kind: EventKind,
    ) -> anyhow::Result<DailyAnalytics>;
    async fn find(&self, site_id: &ID, date: NaiveDate) -> Option<DailyAnalytics>;
}

#[cfg(test)]
mod tests {
    use crate::PopifyContext;
    use chrono::NaiveDate;
    use popify_domain::{EventKind, ID};

    #[tokio::test]
    async fn increments_per_site_and_day() {
        let ctx = PopifyContext::create_inmemory();
        let site_id = ID::new();
        let today = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2021, 6, 2).unwrap();

        assert!(ctx.repos.analytics.find(&site_id, today).await.is_none());

        let res = ctx
            .repos
            .analytics
            .increment(&site_id, today, EventKind::Impression)
            .await
            .unwrap();
        assert_eq!((res.impressions, res.clicks), (1, 0));

        ctx.repos
            .analytics
            .increment(&site_id, today, EventKind::Impression)
            .await
            .unwrap();
        let res = ctx
            .repos
            .analytics
            .increment(&site_id, today, EventKind::Click)
            .await
            .unwrap();
        assert_eq!((res.impressions, res.clicks), (2, 1));

        ctx.repos
            .analytics
            .increment(&site_id, tomorrow, EventKind::Click)
            .await
            .unwrap();
        let res = ctx.repos.analytics.find(&site_id, today).await.unwrap();
        assert_eq!((res.impressions, res.clicks), (2, 1));
        let res = ctx.repos.analytics.find(&site_id, tomorrow).await.unwrap();
        assert_eq!((res.impressions, res.clicks), (0, 1));
    }
}
