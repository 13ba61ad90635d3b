//! # azure-tts-relay
//!
//! A small HTTP relay in front of the Azure Speech text-to-speech API.
//! Browsers post `{text, voiceId?, format?}` to `/tts`; the relay wraps the
//! text in SSML, calls Azure with the server-held subscription key and
//! answers `{mime, audioBase64}`.
//!
//! ## Running
//!
//! ```rust,no_run
//! use azure_tts_relay::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::builder::run_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Using the relay without HTTP
//!
//! ```rust,no_run
//! use azure_tts_relay::{Config, SpeechService, SynthesisRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let service = SpeechService::new(config.speech())?;
//!     let result = service
//!         .synthesize(SynthesisRequest::new("Hallo Welt").with_format("audio/ogg"))
//!         .await?;
//!     println!("{} ({} base64 chars)", result.mime, result.audio_base64.len());
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::speech::{AudioFormat, SpeechService, SynthesisRequest, SynthesisResult};
pub use utils::error::{RelayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
