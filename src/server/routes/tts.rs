//! Text-to-speech endpoint

use crate::core::speech::SynthesisRequest;
use crate::server::state::AppState;
use crate::utils::error::RelayError;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::{error, info, warn};

/// Text-to-speech endpoint
///
/// Accepts `{text, voiceId?, format?}` and answers `{mime, audioBase64}`.
/// The credential is checked before the body is read, so a relay without a
/// key gives the same answer whatever the caller sends.
pub async fn synthesize(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, RelayError> {
    let result = handle(&state, &req, payload).await;

    if let Err(e) = &result {
        if e.is_client_error() {
            warn!("Speech request rejected: {}", e);
        } else {
            error!("Speech generation error: {}", e);
        }
    }

    result
}

async fn handle(
    state: &AppState,
    req: &HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, RelayError> {
    state.speech.client().credential()?;

    let limit = state.config().server().max_body_size;
    let body = payload
        .to_bytes_limited(limit)
        .await
        .map_err(|_| RelayError::invalid_json(format!("Body exceeds {} bytes", limit)))?
        .map_err(|e| RelayError::invalid_json(e.to_string()))?;

    let request = SynthesisRequest::from_body(req.content_type(), &body)?;
    info!(
        "TTS request: voice={:?}, format={:?}, text_len={}",
        request.voice_id,
        request.format,
        request.text_len()
    );

    let result = state.speech.synthesize(request).await?;
    Ok(HttpResponse::Ok().json(result))
}
