//! Speech providers
//!
//! Only Azure is supported.

pub mod azure;

pub use azure::{AzureSpeechClient, SynthesizedAudio};
