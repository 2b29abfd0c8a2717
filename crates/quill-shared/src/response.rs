//! Error response body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the failure.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn not_found() -> Self {
        Self::new("Blog not found")
    }

    pub fn not_authorized() -> Self {
        Self::new("User not authorized")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
