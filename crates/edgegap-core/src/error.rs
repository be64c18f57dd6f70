//! Error types for Edgegap operations.
//!
//! Every binding fails in one of two ways: the transport fails before a status
//! code is obtained, or the API answers with a status above 300. Transport
//! failures carry no response; API failures carry the decoded error message
//! and a snapshot of the raw response.

use crate::response::RawResponse;
use thiserror::Error;

/// Main error type for Edgegap operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API answered with a status code above 300.
    ///
    /// Displays exactly the `message` field of the decoded error body.
    #[error("{message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Message extracted from the error body
        message: String,
        /// Snapshot of the response that carried the error
        response: Box<RawResponse>,
    },

    /// Request timed out before a response was received
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Connection to the API could not be established
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other transport level failure (TLS, body read, redirect loop)
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Response body could not be decoded into the expected type
    #[error("Failed to decode response: {0}")]
    DecodeError(String),

    /// Request could not be built (body encoding, invalid header value)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid endpoint or URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for Edgegap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api { .. } => "API_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Connect(_) => "CONNECT_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::DecodeError(_) => "DECODE_ERROR",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns true if the API answered with a failure status.
    #[must_use]
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns true if the request failed without a usable API answer:
    /// network, TLS, timeout, request encoding or response decoding.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_)
                | Self::Connect(_)
                | Self::HttpError(_)
                | Self::DecodeError(_)
                | Self::InvalidRequest(_)
        )
    }

    /// HTTP status code of an API failure.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response of an API failure. Always `None` for transport failures.
    #[must_use]
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Api { response, .. } => Some(response.as_ref()),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() {
            Self::DecodeError(err.to_string())
        } else if err.is_builder() {
            Self::InvalidRequest(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
