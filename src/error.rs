//! Error types for the SendPulse client
//!
//! All failures are returned as values. The taxonomy distinguishes
//! transport-level failures, non-success HTTP statuses, JSON decode failures
//! on otherwise-successful responses, and semantic failures where a 200
//! response carries `"result": false` or lacks an expected field.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Non-success HTTP status. Transport-level failures (connection refused,
    /// timeout) are mapped here with status 503 SERVICE UNAVAILABLE.
    Http {
        /// HTTP status code returned by the API
        status: StatusCode,
        /// Request path that produced the error
        path: String,
        /// Raw response body (or transport error text)
        body: String,
    },
    /// 401 that survived the single re-authentication retry
    Unauthorized {
        /// Request path that produced the error
        path: String,
        /// Raw response body
        body: String,
    },
    /// JSON decode failure on a successful HTTP status
    Deserialization {
        /// Request path that produced the error
        path: String,
        /// Decoder error message
        message: String,
        /// Raw response body that failed to decode
        body: String,
    },
    /// Semantically invalid response (e.g. `"result": false` on a 200)
    InvalidResponse {
        /// Request path that produced the error
        path: String,
        /// Description of what was missing or false
        message: String,
    },
    /// Local validation failure; no network call was made
    InvalidInput(String),
    /// Underlying reqwest error that is not a connection failure
    Network(reqwest::Error),
    /// JSON serialization error outside of response decoding
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http { status, path, body } => {
                write!(f, "http error {} on {}: {}", status.as_u16(), path, body)
            }
            AppError::Unauthorized { path, body } => {
                write!(f, "unauthorized on {}: {}", path, body)
            }
            AppError::Deserialization { path, message, .. } => {
                write!(f, "deserialization error on {}: {}", path, message)
            }
            AppError::InvalidResponse { path, message } => {
                write!(f, "invalid response on {}: {}", path, message)
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            AppError::Network(e) => write!(f, "network error: {}", e),
            AppError::Json(e) => write!(f, "json error: {}", e),
            AppError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl AppError {
    /// Maps a transport-level reqwest failure to the error taxonomy.
    ///
    /// Connection and timeout failures become `Http` with a fixed 503 status
    /// so callers can branch on status codes uniformly; anything else stays a
    /// `Network` error.
    pub(crate) fn transport(err: reqwest::Error, path: &str) -> Self {
        if err.is_connect() || err.is_timeout() {
            AppError::Http {
                status: StatusCode::SERVICE_UNAVAILABLE,
                path: path.to_string(),
                body: err.to_string(),
            }
        } else {
            AppError::Network(err)
        }
    }

    /// Returns the HTTP status code carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }
}
