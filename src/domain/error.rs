//! Error types for the zshort plugin.
//!
//! This module defines the centralized error type [`ZshortError`] and a type alias
//! [`Result`] used by request building, response decoding and theme loading. The
//! event handler never lets these escape: every error that reaches it is turned
//! into an error notification for the user.

use thiserror::Error;

/// The main error type for zshort operations.
///
/// # Examples
///
/// ```
/// use zshort::ZshortError;
///
/// fn require_api_url(url: Option<&str>) -> Result<&str, ZshortError> {
///     url.ok_or_else(|| ZshortError::Config("api_url is not set".to_string()))
/// }
///
/// assert!(require_api_url(None).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ZshortError {
    /// Configuration is invalid or missing.
    ///
    /// Raised when an operation needs the backend base URL and none was
    /// configured, or when the configured URL cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend answered with a failure or could not be reached.
    ///
    /// Zellij reports transport failures as a `WebRequestResult` with a
    /// non-success status, so both cases land here with the status code.
    #[error("HTTP error (status {status}): {message}")]
    Http {
        /// Status code reported by the host.
        status: u16,
        /// Backend-supplied or transport error text.
        message: String,
    },

    /// A response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ZshortError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized `Result` type for zshort operations.
pub type Result<T> = std::result::Result<T, ZshortError>;
