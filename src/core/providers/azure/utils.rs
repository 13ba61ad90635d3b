//! Azure Speech utilities

/// Header names and fixed values sent with every synthesis call
pub mod headers {
    pub const SUBSCRIPTION_KEY: &str = "Ocp-Apim-Subscription-Key";
    pub const OUTPUT_FORMAT: &str = "X-Microsoft-OutputFormat";
    pub const SSML_CONTENT_TYPE: &str = "application/ssml+xml";
    pub const USER_AGENT: &str = "azure-tts-proxy";
}

const SYNTHESIS_PATH: &str = "/cognitiveservices/v1";

/// Azure Speech utilities
pub struct AzureSpeechUtils;

impl AzureSpeechUtils {
    /// Regional base URL of the text-to-speech service
    pub fn regional_base_url(region: &str) -> String {
        format!("https://{}.tts.speech.microsoft.com", region.trim())
    }

    /// Build the synthesis URL, preferring an explicit endpoint over the region
    pub fn build_synthesis_url(endpoint: Option<&str>, region: &str) -> String {
        let base = match endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => Self::regional_base_url(region),
        };
        format!("{}{}", base, SYNTHESIS_PATH)
    }
}
