use super::INotificationRepo;
use crate::repos::shared::inmemory_repo::*;
use popify_domain::{Notification, ID};

pub struct InMemoryNotificationRepo {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn new() -> Self {
        Self {
            notifications: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl INotificationRepo for InMemoryNotificationRepo {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()> {
        insert(notification, &self.notifications);
        Ok(())
    }

    async fn find_newest_by_site(
        &self,
        site_id: &ID,
        limit: usize,
    ) -> anyhow::Result<Vec<Notification>> {
        let mut notifications = find_by(&self.notifications, |n| n.site_id == *site_id);
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications.truncate(limit);
        Ok(notifications)
    }
}
