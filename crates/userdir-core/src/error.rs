//! Unified error types for all layers of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the userdir service.
///
/// Covers the domain (`NotFound`), the upstream dependency
/// (`Upstream`/`Timeout`/`Decode`), and infrastructure concerns.
#[derive(Error, Debug)]
pub enum UserdirError {
    /// Requested entity is absent from the current snapshot.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Upstream returned a non-success status or the transport failed.
    #[error("Upstream error: {service} - {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    /// An upstream call exceeded its configured timeout.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// An upstream response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl UserdirError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Upstream { .. } | Self::Decode(_) => 502,
            Self::Timeout(_) => 504,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates an upstream error.
    #[must_use]
    pub fn upstream<T: Into<String>>(service: &'static str, message: T) -> Self {
        Self::Upstream {
            service,
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout<T: Into<String>>(message: T) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is a transient upstream failure worth retrying.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::Timeout(_))
    }
}

impl From<serde_json::Error> for UserdirError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("JSON error: {}", err))
    }
}

/// Serializable error response for API error bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `UserdirError`.
    #[must_use]
    pub fn from_error(error: &UserdirError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&UserdirError> for ErrorResponse {
    fn from(error: &UserdirError) -> Self {
        Self::from_error(error)
    }
}
