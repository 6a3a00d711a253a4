//! Unified error handling for nusarasa.
//!
//! All fallible surfaces (HTTP, JSON, filesystem, config) funnel into
//! `NusaError`, categorized for handling decisions. The map core never
//! produces errors: its operations are total over their input domain.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NusaError>;

/// High-level error classification for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout
    Network,
    /// Backend returned an error status
    Server,
    /// OS or filesystem
    System,
    /// Malformed data
    Data,
    /// Bad configuration
    Configuration,
}

/// The unified error type.
#[derive(Debug, Error)]
pub enum NusaError {
    /// HTTP transport failure (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend responded with a non-success status
    #[error("server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem or OS failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Config(String),
}

impl NusaError {
    /// Classify the error for handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            NusaError::Http(_) => ErrorCategory::Network,
            NusaError::Api { .. } => ErrorCategory::Server,
            NusaError::Json(_) => ErrorCategory::Data,
            NusaError::Io(_) => ErrorCategory::System,
            NusaError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether retrying the same operation could succeed.
    ///
    /// Network failures and 5xx responses are transient; everything else
    /// needs a change on the caller's side first.
    pub fn is_retryable(&self) -> bool {
        match self {
            NusaError::Http(_) => true,
            NusaError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = NusaError::Api {
            status: 404,
            message: "recipe not found".to_string(),
        };
        assert_eq!(err.to_string(), "server error (404): recipe not found");
    }

    #[test]
    fn test_categories() {
        let json_err: NusaError = serde_json::from_str::<serde_json::Value>("nope")
            .unwrap_err()
            .into();
        assert_eq!(json_err.category(), ErrorCategory::Data);

        let io_err: NusaError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(io_err.category(), ErrorCategory::System);

        let config_err = NusaError::Config("bad url".to_string());
        assert_eq!(config_err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let err = NusaError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let err = NusaError::Api {
            status: 422,
            message: "validation failed".to_string(),
        };
        assert!(!err.is_retryable());
        assert!(!NusaError::Config("x".to_string()).is_retryable());
    }
}
