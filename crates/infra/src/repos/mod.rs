mod analytics;
mod notification;
mod shared;
mod site;

pub use analytics::IAnalyticsRepo;
use analytics::InMemoryAnalyticsRepo;
pub use notification::INotificationRepo;
use notification::InMemoryNotificationRepo;
pub use site::ISiteRepo;
use site::InMemorySiteRepo;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub sites: Arc<dyn ISiteRepo>,
    pub notifications: Arc<dyn INotificationRepo>,
    pub analytics: Arc<dyn IAnalyticsRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            sites: Arc::new(InMemorySiteRepo::new()),
            notifications: Arc::new(InMemoryNotificationRepo::new()),
            analytics: Arc::new(InMemoryAnalyticsRepo::new()),
        }
    }
}
