//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding the listen host
pub const HOST_VAR: &str = "HOST";
/// Environment variable holding the listen port
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the allowed cross-origin source
pub const CORS_ORIGIN_VAR: &str = "CORS_ORIGIN";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum JSON request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// Allowed cross-origin source, `*` for any
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_size: default_max_body_size(),
            cors_origin: default_cors_origin(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if CORS allows all origins
    pub fn allows_all_origins(&self) -> bool {
        self.cors_origin.is_empty() || self.cors_origin == "*"
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.allows_all_origins() {
            warn!("CORS allows all origins. This may be insecure for production.");
        }

        Ok(())
    }
}
