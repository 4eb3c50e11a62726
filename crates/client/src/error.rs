//! Error types for the Tableau client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Tableau client operations.
///
/// A refused trusted ticket is not an error; see [`crate::TicketOutcome`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP call could not complete (DNS, connection refused, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a status code of 400 or above.
    #[error("HTTP error ({status}): {body}")]
    Http { status: u16, body: String },

    /// Sign-in did not yield a session token.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// A successful response whose body is not the expected JSON.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid or missing server URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl ClientError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_)) || matches!(self.status(), Some(401))
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }

    /// Check if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
