//! HTTP response handling for errors

use super::types::RelayError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

/// Error message used for any upstream non-success status
pub const PROVIDER_ERROR_MESSAGE: &str = "Azure TTS error";
/// Error message used for unexpected runtime failures
pub const RUNTIME_ERROR_MESSAGE: &str = "Server error";
/// Error message used when the body cannot be parsed
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON";

/// JSON error body returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            body: None,
            detail: None,
        }
    }
}

impl RelayError {
    /// Build the JSON body for this error
    pub fn to_body(&self) -> ErrorBody {
        match self {
            RelayError::Config(message) | RelayError::ClientInput(message) => {
                ErrorBody::message(message.as_str())
            }
            RelayError::Provider { status, body } => ErrorBody {
                status: Some(*status),
                body: Some(body.clone()),
                ..ErrorBody::message(PROVIDER_ERROR_MESSAGE)
            },
            RelayError::Runtime(detail) => ErrorBody {
                detail: Some(detail.clone()),
                ..ErrorBody::message(RUNTIME_ERROR_MESSAGE)
            },
            RelayError::InvalidJson(detail) => ErrorBody {
                detail: Some(detail.clone()),
                ..ErrorBody::message(INVALID_JSON_MESSAGE)
            },
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::ClientInput(_) | RelayError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            RelayError::Config(_) | RelayError::Provider { .. } | RelayError::Runtime(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_body())
    }
}
