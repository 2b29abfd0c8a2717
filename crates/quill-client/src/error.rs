use reqwest::StatusCode;
use thiserror::Error;

use quill_shared::ErrorResponse;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Corrupt session file: {0}")]
    CorruptSession(#[from] serde_json::Error),
}

impl ClientError {
    /// Builds an API error from a non-2xx response body.
    /// Bodies that are not `{message}` fall back to the status reason.
    pub(crate) fn from_body(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            });

        Self::Api { status, message }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http(e) => e.status(),
            Self::Api { status, .. } => Some(*status),
            Self::Storage(_) | Self::CorruptSession(_) => None,
        }
    }
}
