//! Error types for the relay

use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, RelayError>;

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum RelayError {
    /// Server-side configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller sent a request that cannot be synthesized
    #[error("Client input error: {0}")]
    ClientInput(String),

    /// The speech provider answered with a non-success status
    #[error("Provider error: status {status}: {body}")]
    Provider {
        /// Upstream HTTP status code
        status: u16,
        /// Upstream body text, empty when it could not be read
        body: String,
    },

    /// Anything else: network failures, body read failures, server errors
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// The request body was not a usable JSON document
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}
