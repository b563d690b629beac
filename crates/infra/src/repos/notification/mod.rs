mod inmemory;

pub use inmemory::InMemoryNotificationRepo;
use popify_domain::{Notification, ID};

#[async_trait::async_trait]
pub trait INotificationRepo: Send + Sync {
    async fn insert(&self, notification: &Notification) -> anyhow::Result<()>;
    /// The `limit` most recent notifications of a `Site`, newest first
    async fn find_newest_by_site(
        &self,
        site_id: &ID,
        limit: usize,
    ) -> anyhow::Result<Vec<Notification>>;
}
