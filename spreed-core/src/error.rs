//! Error types for Talk client operations

use thiserror::Error;

/// Result type alias for Talk client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the Talk client
///
/// HTTP failure statuses map onto the variants via [`Error::from_status`];
/// transport failures (DNS, connect, TLS, timeout) and malformed response
/// bodies keep their own variants so callers can tell "the server said no"
/// apart from "the server never answered" and "the answer made no sense".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The request never completed: DNS, connection, TLS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the credentials (HTTP 401/403)
    #[error("authentication rejected (HTTP {status}): {message}")]
    Auth {
        /// Status code, 401 or 403
        status: u16,
        /// Server-provided failure message
        message: String,
    },

    /// The conversation, message or attendee does not exist (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// The server rejected the payload (HTTP 400/422), or the client
    /// refused to send an obviously invalid request
    #[error("invalid request: {0}")]
    Validation(String),

    /// Duplicate session detected while joining (HTTP 409)
    #[error("conflict: {0}")]
    Conflict(String),

    /// The lobby is active and the user is not a moderator (HTTP 412)
    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    /// The server failed (HTTP 5xx)
    #[error("server error (HTTP {status}): {message}")]
    Server {
        /// Status code
        status: u16,
        /// Server-provided failure message
        message: String,
    },

    /// The response body was not valid JSON or lacked an expected field
    #[error("protocol error: {message}")]
    Protocol {
        /// What was wrong with the response
        message: String,
        /// Underlying decode error if available
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The server does not advertise a capability the operation needs
    #[error("server does not advertise capability '{0}'")]
    MissingCapability(String),

    /// The client was constructed with unusable settings
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Map an HTTP failure status onto the error taxonomy
    ///
    /// Only called for non-success statuses; anything outside the known
    /// set is treated as a server-side failure.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 405 | 413 | 422 => Error::Validation(message),
            401 | 403 => Error::Auth { status, message },
            404 => Error::NotFound(message),
            409 => Error::Conflict(message),
            412 => Error::PreconditionFailed(message),
            _ => Error::Server { status, message },
        }
    }

    /// Create a protocol error without an underlying decode error
    pub fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol {
            message: message.into(),
            source: None,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Protocol {
            message: err.to_string(),
            source: Some(err),
        }
    }
}
