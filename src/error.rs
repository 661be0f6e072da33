// Client Error Types
use serde_json::{json, Value};
use thiserror::Error;

use crate::quota::UploadRejection;

/// Failure surfaced by the data-access layer.
///
/// `Transport` and `Rejected` are kept apart so callers can tell "the backend
/// said no" from "the backend could not be reached".
#[derive(Debug, Error)]
pub enum ClientError {
    // Request could not be sent or the response could not be read
    #[error("{0}")]
    Transport(String),

    // Non-success HTTP status from the backend
    #[error("{message}")]
    Rejected { status: u16, message: String },

    // Success status, but the body does not match the typed contract
    #[error("{0}")]
    Decode(String),

    // Local upload policy refused the candidate before any network call
    #[error("{0}")]
    Policy(UploadRejection),

    // Session persistence failed
    #[error("{0}")]
    Storage(String),

    // Invalid configuration
    #[error("{0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of a backend rejection, if this is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human readable message, identical to `Display`
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "TRANSPORT_ERROR",
            ClientError::Rejected { status: 401, .. } => "UNAUTHORIZED",
            ClientError::Rejected { status: 403, .. } => "FORBIDDEN",
            ClientError::Rejected { status: 404, .. } => "NOT_FOUND",
            ClientError::Rejected { .. } => "BACKEND_REJECTED",
            ClientError::Decode(_) => "DECODE_ERROR",
            ClientError::Policy(rejection) => rejection.reason.as_str(),
            ClientError::Storage(_) => "STORAGE_ERROR",
            ClientError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Convert to JSON body for `--json` output
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "success": false,
            "error": self.message(),
            "error_code": self.error_code(),
        });

        if let Some(status) = self.status_code() {
            body["status"] = json!(status);
        }

        body
    }
}

// Static constructor methods
impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::Transport(message.into())
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        ClientError::Decode(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        ClientError::Storage(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        ClientError::Config(message.into())
    }
}

impl From<UploadRejection> for ClientError {
    fn from(rejection: UploadRejection) -> Self {
        ClientError::Policy(rejection)
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::Config(format!("Invalid backend URL: {}", err))
    }
}
