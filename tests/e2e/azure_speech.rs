//! E2E tests for Azure text-to-speech
//!
//! These tests make real API calls and require a subscription key.
//! Run with: cargo test -- --ignored

#[cfg(test)]
mod tests {
    use azure_tts_relay::{Config, SpeechService, SynthesisRequest};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;

    /// E2E synthesis of a short German sentence as MP3
    /// Requires AZURE_SPEECH_KEY environment variable
    #[tokio::test]
    #[ignore]
    async fn test_synthesize_mp3() {
        crate::skip_without_env!("AZURE_SPEECH_KEY");

        let config = Config::from_env().unwrap();
        let service = SpeechService::new(config.speech()).unwrap();

        let result = service
            .synthesize(SynthesisRequest::new("Hallo, das ist ein Test."))
            .await
            .unwrap();

        assert_eq!(result.mime, "audio/mpeg");
        let audio = STANDARD.decode(result.audio_base64).unwrap();
        assert!(!audio.is_empty());
    }

    /// E2E synthesis as RIFF PCM
    /// Requires AZURE_SPEECH_KEY environment variable
    #[tokio::test]
    #[ignore]
    async fn test_synthesize_wav() {
        crate::skip_without_env!("AZURE_SPEECH_KEY");

        let config = Config::from_env().unwrap();
        let service = SpeechService::new(config.speech()).unwrap();

        let result = service
            .synthesize(SynthesisRequest::new("Kurzer Test.").with_format("audio/wav"))
            .await
            .unwrap();

        assert_eq!(result.mime, "audio/wav");
        let audio = STANDARD.decode(result.audio_base64).unwrap();
        assert!(audio.starts_with(b"RIFF"));
    }
}
