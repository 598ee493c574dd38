//! Error type for every API call.

use reqwest::StatusCode;
use thiserror::Error;

/// A failed request.
///
/// `Display` is the message meant for the user: the backend's own text for
/// auth endpoints, a fixed per-operation message otherwise.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (network error, bad JSON).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },
}

impl ApiError {
    pub(crate) fn status(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the response, if there was one.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
        }
    }
}
