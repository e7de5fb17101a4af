//! Availability API error types

use thiserror::Error;

/// Errors that can occur while querying availability
#[derive(Debug, Error)]
pub enum ValeError {
    /// Connection to the API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The API answered with a non-success status
    #[error("Availability API returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// Failed to parse the API answer
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl ValeError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::HttpStatus { status } => *status == 429 || *status >= 500,
            Self::ParseError(_) | Self::ConfigurationError(_) => false,
        }
    }
}
