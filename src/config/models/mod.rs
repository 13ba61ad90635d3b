//! Configuration data models
//!
//! This module defines the configuration structures read at startup.

pub mod server;
pub mod speech;

pub use server::*;
pub use speech::*;

/// Default listen host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    3000
}

/// Default maximum JSON body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default allowed cross-origin source
pub fn default_cors_origin() -> String {
    "*".to_string()
}

/// Default Azure Speech region
pub fn default_region() -> String {
    "westeurope".to_string()
}

/// Default Azure neural voice
pub fn default_voice() -> String {
    "de-DE-AmalaNeural".to_string()
}

/// Default SSML document language
pub fn default_language() -> String {
    "de-DE".to_string()
}
