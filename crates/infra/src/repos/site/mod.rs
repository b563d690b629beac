mod inmemory;

pub use inmemory::InMemorySiteRepo;
use popify_domain::Site;

#[async_trait::async_trait]
pub trait ISiteRepo: Send + Sync {
    async fn insert(&self, site: &Site) -> anyhow::Result<()>;
    async fn find_by_api_key(&self, api_key: &str) -> Option<Site>;
}
