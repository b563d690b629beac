mod get_widget_feed;
mod track_widget_event;

use actix_web::web;
use get_widget_feed::get_widget_feed_controller;
use track_widget_event::track_widget_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/widget", web::get().to(get_widget_feed_controller));
    cfg.route(
        "/widget/track",
        web::post().to(track_widget_event_controller),
    );
}
