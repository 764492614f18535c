//! # Error Types
//!
//! Typed error handling for the PayPal REST client.
//! All API operations return `Result<T, Error>`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Core error type for all client operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// Configuration errors (missing environment variables, invalid values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request payload could not be serialized (caller-side bug)
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Connection-level failure before any HTTP response arrived
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered outside the 2xx range
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response body did not match the expected shape
    #[error("Decode error (HTTP {status}): {message}")]
    Decode {
        status: u16,
        message: String,
        /// Raw response body as received
        body: String,
    },

    /// The OAuth2 token exchange failed
    #[error("Authentication failed: {0}")]
    Auth(#[source] Box<Error>),
}

impl Error {
    /// HTTP status of the response this error was built from, if one arrived
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api(e) => Some(e.status),
            Error::Decode { status, .. } => Some(*status),
            Error::Auth(inner) => inner.status(),
            _ => None,
        }
    }

    /// Structured service error, when the failure was a non-2xx response
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            Error::Auth(inner) => inner.as_api(),
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Service error envelope
// ============================================================================

/// One field-level issue inside the service error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub issue: String,
}

/// Error payload the service returns on non-2xx responses.
///
/// When the body is not a valid envelope the structured fields stay empty;
/// `status` and `body` always reflect exactly what was received.
#[derive(Debug, Clone, Default)]
pub struct ApiError {
    pub status: u16,
    pub name: String,
    pub message: String,
    pub debug_id: String,
    pub information_link: String,
    pub details: Vec<ErrorDetail>,
    /// Raw response body as received
    pub body: String,
}

impl ApiError {
    /// Builds the error from a non-2xx response, tolerating unparseable bodies
    pub fn from_response(status: u16, body: String) -> Self {
        #[derive(Default, Deserialize)]
        struct Envelope {
            #[serde(default)]
            name: String,
            #[serde(default)]
            message: String,
            #[serde(default)]
            debug_id: String,
            #[serde(default)]
            information_link: String,
            #[serde(default)]
            details: Vec<ErrorDetail>,
        }

        let env: Envelope = serde_json::from_str(&body).unwrap_or_default();
        ApiError {
            status,
            name: env.name,
            message: env.message,
            debug_id: env.debug_id,
            information_link: env.information_link,
            details: env.details,
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() && self.message.is_empty() {
            write!(f, "HTTP {}: {}", self.status, self.body)
        } else {
            write!(f, "HTTP {} {}: {}", self.status, self.name, self.message)
        }
    }
}

impl std::error::Error for ApiError {}
