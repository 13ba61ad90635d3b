//! Text-to-speech relay
//!
//! Validates a request, wraps its text in SSML, calls Azure once and
//! returns the audio base64-encoded.

mod format;
mod service;
mod ssml;
mod types;

pub use format::AudioFormat;
pub use service::{MISSING_TEXT_MESSAGE, SpeechService};
pub use ssml::{build_ssml, escape_xml};
pub use types::{SynthesisRequest, SynthesisResult, is_json_content_type};
