use super::ISiteRepo;
use crate::repos::shared::inmemory_repo::*;
use popify_domain::Site;

pub struct InMemorySiteRepo {
    sites: std::sync::Mutex<Vec<Site>>,
}

impl InMemorySiteRepo {
    pub fn new() -> Self {
        Self {
            sites: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ISiteRepo for InMemorySiteRepo {
    async fn insert(&self, site: &Site) -> anyhow::Result<()> {
        insert(site, &self.sites);
        Ok(())
    }

    async fn find_by_api_key(&self, api_key: &str) -> Option<Site> {
        find_by(&self.sites, |site| site.api_key == api_key)
            .into_iter()
            .next()
    }
}
