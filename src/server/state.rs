//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::speech::SpeechService;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything in here is read-only after startup, so handlers share it
/// without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relay configuration
    pub config: Arc<Config>,
    /// Text-to-speech relay
    pub speech: Arc<SpeechService>,
}

impl AppState {
    /// Create a new AppState from configuration
    pub fn new(config: Config) -> Result<Self> {
        let speech = SpeechService::new(config.speech())?;

        Ok(Self {
            config: Arc::new(config),
            speech: Arc::new(speech),
        })
    }

    /// Get relay configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
