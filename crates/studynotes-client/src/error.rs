//! Client error types.

/// Message returned when notes are requested for a blank topic.
pub const EMPTY_TOPIC: &str = "Topic cannot be empty.";

/// Errors returned by backend calls.
///
/// `Display` is the human-readable message shown next to the control that
/// triggered the call. For [`ClientError::Backend`] it is exactly the
/// normalized backend message.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Rejected locally, no request was made.
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response.
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Transport failure (connection refused, DNS, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status code, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was raised before any request went out.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for backend calls.
pub type ClientResult<T> = Result<T, ClientError>;
