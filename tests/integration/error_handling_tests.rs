//! Error handling integration tests
//!
//! The taxonomy-to-HTTP mapping is checked here without any network call.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use azure_tts_relay::RelayError;
    use serde_json::{Value, json};

    async fn rendered(error: RelayError) -> (u16, Value) {
        let response = error.error_response();
        let status = response.status().as_u16();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_configuration_error_flow() {
        let (status, body) = rendered(RelayError::config("AZURE_SPEECH_KEY not set")).await;
        assert_eq!(status, 500);
        assert_eq!(body, json!({ "error": "AZURE_SPEECH_KEY not set" }));
    }

    #[actix_web::test]
    async fn test_client_input_error_flow() {
        let (status, body) = rendered(RelayError::client_input("Missing text")).await;
        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "Missing text" }));
    }

    #[actix_web::test]
    async fn test_provider_error_flow() {
        let (status, body) = rendered(RelayError::provider(401, "Unauthorized")).await;
        assert_eq!(status, 500);
        assert_eq!(
            body,
            json!({ "error": "Azure TTS error", "status": 401, "body": "Unauthorized" })
        );
    }

    #[actix_web::test]
    async fn test_runtime_error_flow() {
        let (status, body) = rendered(RelayError::runtime("dns error")).await;
        assert_eq!(status, 500);
        assert_eq!(body, json!({ "error": "Server error", "detail": "dns error" }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            RelayError::config("AZURE_SPEECH_KEY not set").to_string(),
            "Configuration error: AZURE_SPEECH_KEY not set"
        );
        assert_eq!(
            RelayError::provider(404, "not found").to_string(),
            "Provider error: status 404: not found"
        );
    }
}
