//! HTTP route modules

pub mod health;
pub mod tts;

use actix_web::web;

/// Register every relay route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::liveness))
        .route("/tts", web::post().to(tts::synthesize));
}
