//! Error types for the person-directory client.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Every failure an operation can produce collapses into one taxonomy: remote
//! rejections and transport breakdowns both surface as [`DirectoryError::Remote`]
//! carrying an HTTP-ish status and a human-readable message, so callers never
//! branch on transport vs. application failure.

use thiserror::Error;

/// The main error type for person-directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory service rejected a request, or could not be reached.
    ///
    /// `status` is the HTTP status code of a non-2xx response, or `0` when no
    /// HTTP response was obtained at all (connection refused, malformed body).
    /// `message` is the service's `detail` field when one could be extracted,
    /// otherwise a generic fallback.
    #[error("{message}")]
    Remote {
        /// HTTP status code, or `0` for transport-level failures.
        status: u16,
        /// Human-readable description of the failure.
        message: String,
    },

    /// A draft or patch was rejected before any network call was made.
    ///
    /// Produced by the caller-side checks on required names and the email
    /// shape. The list and the in-flight flags are untouched when this occurs.
    #[error("{0}")]
    Validation(String),

    /// Configuration is invalid or could not be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Only reachable while reading an optional configuration file at startup.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectoryError {
    /// Builds the transport-failure form of [`DirectoryError::Remote`].
    ///
    /// Status `0` marks "no HTTP response"; everything else about the value
    /// behaves like any other remote failure.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Remote {
            status: 0,
            message: message.into(),
        }
    }
}

/// A specialized `Result` type for person-directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_displays_message_only() {
        let error = DirectoryError::Remote {
            status: 404,
            message: "person not found".to_string(),
        };
        assert_eq!(error.to_string(), "person not found");
    }

    #[test]
    fn transport_failure_uses_status_zero() {
        let error = DirectoryError::transport("connection refused");
        match error {
            DirectoryError::Remote { status, message } => {
                assert_eq!(status, 0);
                assert_eq!(message, "connection refused");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
