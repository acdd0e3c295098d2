//! Fetch error taxonomy.

use crate::constants::exit_codes;

/// Error type for dashboard fetches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DashboardError {
    /// The request never produced a response (DNS, connect, reset, timeout).
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected JSON shape.
    #[error("malformed payload from {url}: {message}")]
    Payload { url: String, message: String },

    /// Invalid client configuration (bad base URL, bad duration).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification of a [`DashboardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Status,
    Payload,
    Config,
}

impl DashboardError {
    /// Build a payload error from a JSON decoding failure.
    pub fn payload(url: impl Into<String>, err: &serde_json::Error) -> Self {
        Self::Payload {
            url: url.into(),
            message: err.to_string(),
        }
    }

    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Status { .. } => ErrorKind::Status,
            Self::Payload { .. } => ErrorKind::Payload,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// Process exit code for one-shot mode.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Transport => exit_codes::ERROR_TRANSPORT,
            ErrorKind::Status => exit_codes::ERROR_STATUS,
            ErrorKind::Payload | ErrorKind::Config => exit_codes::ERROR_INVALID,
        }
    }
}
