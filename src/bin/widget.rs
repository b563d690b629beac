#[path = "../telemetry.rs"]
mod telemetry;

use popify_widget::{init_widget, MarkupAdapter, WidgetConfig, WidgetContext, WidgetRuntime};
use telemetry::{get_subscriber, init_subscriber};

/// Runs the widget headless against the configured api. Every notification
/// it shows is logged instead of drawn.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();

    let subscriber = get_subscriber("popify_widget".into(), "info".into());
    init_subscriber(subscriber);

    let config = WidgetConfig::from_env();
    let context = WidgetContext::create(config.api_url.clone());
    let runtime = WidgetRuntime::new();

    let scheduler = match init_widget(
        config.access_key.as_deref(),
        &context,
        MarkupAdapter::new(config.locale),
        runtime.timers(),
    )
    .await
    {
        Ok(scheduler) => scheduler,
        Err(_) => return Ok(()),
    };

    runtime.run(scheduler).await;
    Ok(())
}
