//! Azure Speech Client
//!
//! HTTP client wrapper for the Azure text-to-speech endpoint

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use super::utils::{AzureSpeechUtils, headers};
use crate::config::{API_KEY_VAR, SpeechConfig};
use crate::utils::error::{RelayError, Result};

/// Audio returned by a successful synthesis call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    /// Output format token the audio was requested with
    pub output_format: String,
    /// Raw audio bytes
    pub data: Bytes,
}

/// Azure Speech client
#[derive(Clone)]
pub struct AzureSpeechClient {
    api_key: Option<String>,
    url: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for AzureSpeechClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureSpeechClient")
            .field("has_api_key", &self.api_key.is_some())
            .field("url", &self.url)
            .finish()
    }
}

impl AzureSpeechClient {
    /// Create new Azure Speech client
    pub fn new(config: &SpeechConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(headers::USER_AGENT);
        if let Some(timeout) = config.timeout_duration() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| RelayError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone().filter(|key| !key.is_empty()),
            url: AzureSpeechUtils::build_synthesis_url(config.endpoint.as_deref(), &config.region),
            http_client,
        })
    }

    /// Synthesis endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Subscription key, or a configuration error when none is held
    pub fn credential(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| RelayError::Config(format!("{} not set", API_KEY_VAR)))
    }

    /// Send one SSML document and return the audio
    pub async fn synthesize(&self, ssml: String, output_format: &str) -> Result<SynthesizedAudio> {
        let api_key = self.credential()?;

        debug!(url = %self.url, output_format, "Sending synthesis request");

        let response = self
            .http_client
            .post(&self.url)
            .header(headers::SUBSCRIPTION_KEY, api_key)
            .header(CONTENT_TYPE, headers::SSML_CONTENT_TYPE)
            .header(headers::OUTPUT_FORMAT, output_format)
            .body(ssml)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            warn!(status = status.as_u16(), "Azure speech request failed");
            return Err(RelayError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let data = response.bytes().await?;
        debug!(bytes = data.len(), "Received synthesized audio");

        Ok(SynthesizedAudio {
            output_format: output_format.to_string(),
            data,
        })
    }
}

/// Read the body of a failed response; a read failure yields an empty string
async fn read_error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!(error = %e, "Could not read provider error body");
            String::new()
        }
    }
}
