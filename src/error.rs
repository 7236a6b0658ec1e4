//! Error types for supacrud
//!
//! This module defines the error taxonomy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Only three kinds of failure cross the public boundary: configuration
//! errors at construction, validation errors before any network call, and
//! request errors once retries are exhausted or a non-retryable status is
//! hit. Transport-level failures from the HTTP stack never leak as their
//! native types.

use thiserror::Error;

/// The main error type for supacrud
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid retry policy, credentials, or client configuration
    #[error("configuration error: {message}")]
    Config {
        /// What was invalid
        message: String,
    },

    /// Caller supplied insufficient or malformed arguments; raised before
    /// any network call is made
    #[error("validation error: {message}")]
    Validation {
        /// What was missing or malformed
        message: String,
    },

    /// Terminal request failure: a non-retryable status, exhausted retries,
    /// or an unrecoverable transport problem
    #[error("{message}")]
    Request {
        /// Failure description, taken from the response body's `message`
        /// field when the server provided one
        message: String,
        /// HTTP status of the last attempt; `None` for transport failures
        status_code: Option<u16>,
        /// Target URL of the failing request
        url: Option<String>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a request error with status and URL
    pub fn request(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Request {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a transport-level request error (no HTTP status)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            status_code: None,
            url: None,
        }
    }

    /// The HTTP status carried by this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request { status_code, .. } => *status_code,
            _ => None,
        }
    }

    /// The target URL carried by this error, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Request { url, .. } => url.as_deref(),
            _ => None,
        }
    }
}

/// Result type alias for supacrud
pub type Result<T> = std::result::Result<T, Error>;
