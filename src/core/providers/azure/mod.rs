//! Azure Cognitive Services speech provider
//!
//! A thin client for the text-to-speech REST endpoint.

mod client;
mod utils;

pub use client::{AzureSpeechClient, SynthesizedAudio};
pub use utils::{AzureSpeechUtils, headers};
