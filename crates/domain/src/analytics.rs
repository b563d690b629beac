use crate::shared::entity::ID;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Engagement signal reported by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Impression,
    Click,
}

impl Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Impression => f.write_str("impression"),
            Self::Click => f.write_str("click"),
        }
    }
}

/// Impression and click counters of a `Site` for a single UTC day
#[derive(Debug, Clone, PartialEq)]
pub struct DailyAnalytics {
    pub id: ID,
    pub site_id: ID,
    pub date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
}

impl DailyAnalytics {
    pub fn new(site_id: ID, date: NaiveDate) -> Self {
        Self {
            id: Default::default(),
            site_id,
            date,
            impressions: 0,
            clicks: 0,
        }
    }

    pub fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Impression => self.impressions += 1,
            EventKind::Click => self.clicks += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_kind_separately() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
        let mut analytics = DailyAnalytics::new(ID::new(), date);
        analytics.record(EventKind::Impression);
        analytics.record(EventKind::Impression);
        analytics.record(EventKind::Click);
        assert_eq!(analytics.impressions, 2);
        assert_eq!(analytics.clicks, 1);
    }

    #[test]
    fn event_kind_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&EventKind::Impression).unwrap(),
            "\"impression\""
        );
        let kind: EventKind = serde_json::from_str("\"click\"").unwrap();
        assert_eq!(kind, EventKind::Click);
    }
}
