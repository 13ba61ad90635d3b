//! Liveness endpoint

use actix_web::HttpResponse;
use tracing::debug;

/// Fixed body returned by the liveness check
pub const LIVENESS_MESSAGE: &str = "Azure TTS proxy OK";

/// Basic liveness check
///
/// Answers even when the relay has no credential, so load balancers can
/// tell a running process from a misconfigured one.
pub async fn liveness() -> HttpResponse {
    debug!("Liveness check requested");

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}
