use chrono::{Duration, Utc};
use popify_api::Application;
use popify_domain::{Notification, NotificationKind, Site};
use popify_infra::{setup_context, PopifyContext};
use popify_sdk::PopifySDK;

pub struct TestApp {
    pub ctx: PopifyContext,
}

impl TestApp {
    /// Stores a `Site` with `notifications` purchases, one minute apart with
    /// `Buyer 0` being the newest
    pub async fn seed_site(&self, site: Site, notifications: usize) -> Site {
        self.ctx.repos.sites.insert(&site).await.unwrap();
        for i in 0..notifications {
            let notification = Notification::new(
                site.id.clone(),
                NotificationKind::Purchase,
                format!("Buyer {}", i),
                "purchased".into(),
                "Pro plan".into(),
                Utc::now() - Duration::minutes(i as i64),
            )
            .with_location("Lisbon");
            self.ctx
                .repos
                .notifications
                .insert(&notification)
                .await
                .unwrap();
        }
        site
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, PopifySDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { ctx };
    let sdk = PopifySDK::new(address.clone());
    (app, sdk, address)
}
