//! Azure Speech configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the subscription key
pub const API_KEY_VAR: &str = "AZURE_SPEECH_KEY";
/// Environment variable holding the service region
pub const REGION_VAR: &str = "AZURE_SPEECH_REGION";
/// Environment variable overriding the synthesis base URL
pub const ENDPOINT_VAR: &str = "AZURE_SPEECH_ENDPOINT";
/// Environment variable holding the default voice
pub const VOICE_VAR: &str = "AZURE_SPEECH_VOICE";
/// Environment variable holding the SSML language
pub const LANGUAGE_VAR: &str = "AZURE_SPEECH_LANG";
/// Environment variable holding the outbound timeout in seconds
pub const TIMEOUT_VAR: &str = "AZURE_SPEECH_TIMEOUT_SECS";

/// Azure Speech configuration
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Subscription key, `None` when unset or empty
    #[serde(default)]
    pub api_key: Option<String>,
    /// Service region, e.g. `westeurope`
    #[serde(default = "default_region")]
    pub region: String,
    /// Base URL replacing `https://{region}.tts.speech.microsoft.com`
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Voice used when a request names none
    #[serde(default = "default_voice")]
    pub default_voice: String,
    /// `xml:lang` of the generated SSML
    #[serde(default = "default_language")]
    pub language: String,
    /// Outbound request timeout in seconds, no timeout when `None`
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: default_region(),
            endpoint: None,
            default_voice: default_voice(),
            language: default_language(),
            timeout: None,
        }
    }
}

// The key must never reach the logs
impl std::fmt::Debug for SpeechConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("default_voice", &self.default_voice)
            .field("language", &self.language)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SpeechConfig {
    /// Whether a usable subscription key is present
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Outbound request timeout
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Validate speech configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.region.trim().is_empty() && self.endpoint.is_none() {
            return Err("Region cannot be empty".to_string());
        }

        if self.default_voice.trim().is_empty() {
            return Err("Default voice cannot be empty".to_string());
        }

        if self.timeout == Some(0) {
            return Err("Timeout cannot be 0".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!("Endpoint must be an http(s) URL: {}", endpoint));
            }
        }

        Ok(())
    }
}
