//! Configuration management for the relay
//!
//! All settings come from the environment and are read exactly once at
//! startup. Handlers only ever see the resulting [`Config`].

pub mod models;

pub use models::*;

use crate::utils::error::{RelayError, Result};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Azure Speech settings
    pub speech: SpeechConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let defaults = ServerConfig::default();
        let server = ServerConfig {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port: parse_var(&get, PORT_VAR)?.unwrap_or(defaults.port),
            max_body_size: defaults.max_body_size,
            cors_origin: get(CORS_ORIGIN_VAR).unwrap_or(defaults.cors_origin),
        };

        let defaults = SpeechConfig::default();
        let speech = SpeechConfig {
            api_key: get(API_KEY_VAR),
            region: get(REGION_VAR).unwrap_or(defaults.region),
            endpoint: get(ENDPOINT_VAR),
            default_voice: get(VOICE_VAR).unwrap_or(defaults.default_voice),
            language: get(LANGUAGE_VAR).unwrap_or(defaults.language),
            timeout: parse_var(&get, TIMEOUT_VAR)?,
        };

        let config = Self { server, speech };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get speech configuration
    pub fn speech(&self) -> &SpeechConfig {
        &self.speech
    }

    /// Validate the entire configuration
    ///
    /// A missing subscription key is not fatal here: the server still starts
    /// and reports the problem on each synthesis request.
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| RelayError::Config(format!("Server config error: {}", e)))?;

        self.speech
            .validate()
            .map_err(|e| RelayError::Config(format!("Speech config error: {}", e)))?;

        if !self.speech.has_api_key() {
            warn!("{} is not set, synthesis requests will fail", API_KEY_VAR);
        }

        Ok(())
    }
}

fn parse_var<T, F>(get: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| RelayError::Config(format!("Invalid {} '{}': {}", key, raw, e)))
        })
        .transpose()
}
