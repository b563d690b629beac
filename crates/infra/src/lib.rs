mod config;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IAnalyticsRepo, INotificationRepo, ISiteRepo, Repos};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct PopifyContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl PopifyContext {
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> PopifyContext {
    PopifyContext::create_inmemory()
}
