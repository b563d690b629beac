mod helpers;

use helpers::setup::spawn_app;
use popify_domain::{EventKind, Position, Site, Theme};
use popify_sdk::{APIError, PopifySDK};

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let res = sdk
        .status
        .check_health()
        .await
        .expect("Expected healthy server");
    assert_eq!(res.message, "Popify is up");
    assert!(!res.version.is_empty());
}

#[actix_web::test]
async fn test_feed_returns_newest_notifications_with_settings() {
    let (app, sdk, _) = spawn_app().await;
    let mut site = Site::new("Shop", "shop.example.com");
    site.settings.position = Position::TopRight;
    site.settings.theme = Theme::Dark;
    let site = app.seed_site(site, 12).await;
    // Another site's notifications never leak into the feed
    app.seed_site(Site::new("Other", "other.example.com"), 3).await;

    let res = sdk
        .widget
        .feed(&site.api_key)
        .await
        .expect("Expected to get feed");

    assert_eq!(res.notifications.len(), 10);
    assert_eq!(res.notifications[0].name, "Buyer 0");
    assert_eq!(res.notifications[9].name, "Buyer 9");
    assert!(res
        .notifications
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    assert_eq!(res.notifications[0].location.as_deref(), Some("Lisbon"));

    let settings = res.settings.expect("Expected settings");
    assert_eq!(settings.position, Some(Position::TopRight));
    assert_eq!(settings.theme, Some(Theme::Dark));
    assert_eq!(settings.duration, Some(5000));
    assert_eq!(settings.delay, Some(3000));
}

#[actix_web::test]
async fn test_feed_rejects_missing_and_unknown_keys() {
    let (app, sdk, _) = spawn_app().await;
    app.seed_site(Site::new("Shop", "shop.example.com"), 1).await;

    match sdk.widget.feed("").await {
        Err(APIError::UnexpectedStatusCode(status)) => assert_eq!(status.as_u16(), 400),
        other => panic!("Expected bad request, got: {:?}", other.map(|_| ())),
    }
    match sdk.widget.feed("pk_unknown").await {
        Err(APIError::UnexpectedStatusCode(status)) => assert_eq!(status.as_u16(), 401),
        other => panic!("Expected unauthorized, got: {:?}", other.map(|_| ())),
    }
}

#[actix_web::test]
async fn test_track_increments_daily_analytics() {
    let (app, sdk, _) = spawn_app().await;
    let site = app
        .seed_site(Site::new("Shop", "shop.example.com"), 1)
        .await;

    for kind in [EventKind::Impression, EventKind::Impression, EventKind::Click] {
        let res = sdk
            .widget
            .track(&site.api_key, kind)
            .await
            .expect("Expected to track event");
        assert!(res.success);
    }

    let today = app.ctx.sys.now().date_naive();
    let analytics = app
        .ctx
        .repos
        .analytics
        .find(&site.id, today)
        .await
        .expect("Expected analytics row");
    assert_eq!(analytics.impressions, 2);
    assert_eq!(analytics.clicks, 1);

    assert!(sdk
        .widget
        .track("pk_unknown", EventKind::Click)
        .await
        .is_err());
}

#[actix_web::test]
async fn test_track_on_unreachable_server_fails_with_network_error() {
    let sdk = PopifySDK::new("http://127.0.0.1:9/api");
    match sdk.widget.track("pk_test", EventKind::Click).await {
        Err(APIError::Network) => (),
        other => panic!("Expected network error, got: {:?}", other.map(|_| ())),
    }
}
