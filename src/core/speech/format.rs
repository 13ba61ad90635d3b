//! Audio format correspondence
//!
//! One table maps the public format a caller asks for to the Azure output
//! token, and the token back to the mime type returned to the caller.

use std::fmt;

/// Output formats the relay can ask Azure for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioFormat {
    /// 24kHz 48kbit/s mono MP3
    #[default]
    Mp3,
    /// 16kHz 16-bit mono PCM in a RIFF container
    Wav,
    /// 24kHz mono Opus in an Ogg container
    Ogg,
}

impl AudioFormat {
    /// All supported formats
    pub const ALL: [AudioFormat; 3] = [AudioFormat::Mp3, AudioFormat::Wav, AudioFormat::Ogg];

    /// Resolve a caller-supplied format; anything unknown falls back to MP3
    pub fn from_public(format: Option<&str>) -> Self {
        match format {
            Some("audio/wav") => AudioFormat::Wav,
            Some("audio/ogg") => AudioFormat::Ogg,
            _ => AudioFormat::Mp3,
        }
    }

    /// Resolve an Azure output token
    pub fn from_provider_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.provider_token() == token)
    }

    /// Public name a caller uses to select this format
    pub fn public_name(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mp3",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Ogg => "audio/ogg",
        }
    }

    /// Value of the `X-Microsoft-OutputFormat` header
    pub fn provider_token(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio-24khz-48kbitrate-mono-mp3",
            AudioFormat::Wav => "riff-16khz-16bit-mono-pcm",
            AudioFormat::Ogg => "ogg-24khz-16bit-mono-opus",
        }
    }

    /// Mime type reported back with the audio
    pub fn mime(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Ogg => "audio/ogg",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.public_name())
    }
}
