//! Type conversions for RelayError

use super::types::RelayError;

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return RelayError::Runtime(format!("Request to speech provider timed out: {}", err));
        }
        RelayError::Runtime(err.to_string())
    }
}

impl From<std::io::Error> for RelayError {
    fn from(err: std::io::Error) -> Self {
        RelayError::Runtime(err.to_string())
    }
}
