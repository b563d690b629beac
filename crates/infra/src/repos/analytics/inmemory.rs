use super::IAnalyticsRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use popify_domain::{DailyAnalytics, EventKind, ID};

pub struct InMemoryAnalyticsRepo {
    analytics: std::sync::Mutex<Vec<DailyAnalytics>>,
}

impl InMemoryAnalyticsRepo {
    pub fn new() -> Self {
        Self {
            analytics: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAnalyticsRepo for InMemoryAnalyticsRepo {
    async fn increment(
        &self,
        site_id: &ID,
        date: NaiveDate,
        kind: EventKind,
    ) -> anyhow::Result<DailyAnalytics> {
        let analytics = upsert_by(
            &self.analytics,
            |a| a.site_id == *site_id && a.date == date,
            || DailyAnalytics::new(site_id.clone(), date),
            |a| a.record(kind),
        );
        Ok(analytics)
    }

    async fn find(&self, site_id: &ID, date: NaiveDate) -> Option<DailyAnalytics> {
        find_by(&self.analytics, |a| a.site_id == *site_id && a.date == date)
            .into_iter()
            .next()
    }
}
