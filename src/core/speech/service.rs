//! Text-to-speech relay

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, info};

use super::format::AudioFormat;
use super::ssml::build_ssml;
use super::types::{SynthesisRequest, SynthesisResult};
use crate::config::SpeechConfig;
use crate::core::providers::AzureSpeechClient;
use crate::utils::error::{RelayError, Result};

/// Message returned when a request carries no usable text
pub const MISSING_TEXT_MESSAGE: &str = "Missing text";

/// Turns one synthesis request into one Azure call
#[derive(Debug, Clone)]
pub struct SpeechService {
    client: AzureSpeechClient,
    default_voice: String,
    language: String,
}

impl SpeechService {
    /// Create a new speech service
    pub fn new(config: &SpeechConfig) -> Result<Self> {
        Ok(Self {
            client: AzureSpeechClient::new(config)?,
            default_voice: config.default_voice.clone(),
            language: config.language.clone(),
        })
    }

    /// Underlying provider client
    pub fn client(&self) -> &AzureSpeechClient {
        &self.client
    }

    /// Convert text to speech
    ///
    /// The credential is checked before the request itself, so a relay
    /// without a key rejects every request the same way. Neither check
    /// touches the network.
    pub async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResult> {
        self.client.credential()?;

        let text = request
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| RelayError::client_input(MISSING_TEXT_MESSAGE))?;

        let voice = request.voice_id.as_deref().unwrap_or(&self.default_voice);
        let format = AudioFormat::from_public(request.format.as_deref());

        info!(
            "Generating speech: voice={}, format={}, text_len={}",
            voice,
            format,
            text.len()
        );

        let ssml = build_ssml(&self.language, voice, text);
        let audio = self.client.synthesize(ssml, format.provider_token()).await?;

        let mime = AudioFormat::from_provider_token(&audio.output_format)
            .unwrap_or_default()
            .mime();
        debug!(mime, bytes = audio.data.len(), "Encoding synthesized audio");

        Ok(SynthesisResult {
            mime: mime.to_string(),
            audio_base64: STANDARD.encode(&audio.data),
        })
    }
}
