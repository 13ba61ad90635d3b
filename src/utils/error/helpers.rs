//! Helper functions for creating specific error types

use super::types::RelayError;

impl RelayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn client_input<S: Into<String>>(message: S) -> Self {
        Self::ClientInput(message.into())
    }

    pub fn provider<S: Into<String>>(status: u16, body: S) -> Self {
        Self::Provider {
            status,
            body: body.into(),
        }
    }

    pub fn runtime<S: Into<String>>(message: S) -> Self {
        Self::Runtime(message.into())
    }

    pub fn invalid_json<S: Into<String>>(message: S) -> Self {
        Self::InvalidJson(message.into())
    }

    /// Whether the error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ClientInput(_) | Self::InvalidJson(_))
    }
}
