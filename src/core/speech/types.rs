//! Speech API type definitions

use crate::utils::error::{RelayError, Result};
use serde::{Deserialize, Serialize};

/// Whether a `Content-Type` (without parameters) declares a JSON body
pub fn is_json_content_type(content_type: &str) -> bool {
    let content_type = content_type.trim().to_ascii_lowercase();
    content_type == "application/json" || content_type.ends_with("+json")
}

/// Inbound text-to-speech request
///
/// Every field is optional at the wire level so that a missing `text`
/// reaches the relay as a client input error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    /// Text to speak, must be non-blank
    #[serde(default)]
    pub text: Option<String>,

    /// Azure voice name, e.g. `de-DE-AmalaNeural`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,

    /// Public audio format: `audio/mp3`, `audio/wav` or `audio/ogg`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl SynthesisRequest {
    /// Create a request for the given text with default voice and format
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Set the voice
    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = Some(voice_id.into());
        self
    }

    /// Set the public format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Read a request from a raw HTTP body
    ///
    /// An empty body, or one not declared as JSON, reads as `{}` so that it
    /// ends up as a missing-text error. A JSON body that does not parse into
    /// a request is an invalid JSON error.
    pub fn from_body(content_type: &str, body: &[u8]) -> Result<Self> {
        if body.is_empty() || !is_json_content_type(content_type) {
            return Ok(Self::default());
        }

        serde_json::from_slice(body).map_err(|e| RelayError::invalid_json(e.to_string()))
    }

    /// Length of the text in bytes, zero when absent
    pub fn text_len(&self) -> usize {
        self.text.as_deref().map_or(0, str::len)
    }
}

/// Synthesized audio ready for a JSON envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResult {
    /// Container type of the audio
    pub mime: String,

    /// Audio bytes, standard base64 with padding
    pub audio_base64: String,
}
