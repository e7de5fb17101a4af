//! Telegram error types

use thiserror::Error;

/// Errors that can occur while talking to the Bot API
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Connection to the Bot API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The bot token was rejected
    #[error("Bot token rejected: {0}")]
    Unauthorized(String),

    /// Too many requests
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimited {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// The Bot API refused the request
    #[error("Bot API error {code}: {description}")]
    Api {
        /// HTTP status or Bot API error code
        code: u16,
        /// Human-readable description from the API
        description: String,
    },

    /// Failed to parse the API answer
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl TelegramError {
    /// Returns true if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } | Self::RateLimited { .. } => true,
            Self::Api { code, .. } => *code >= 500,
            Self::Unauthorized(_) | Self::ParseError(_) | Self::Configuration(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(TelegramError::ConnectionFailed("reset".to_string()).is_retryable());
        assert!(TelegramError::Timeout { timeout_secs: 30 }.is_retryable());
        assert!(
            TelegramError::RateLimited {
                retry_after_secs: Some(3)
            }
            .is_retryable()
        );
        assert!(
            TelegramError::Api {
                code: 502,
                description: "Bad Gateway".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_non_retryable_errors() {
        assert!(!TelegramError::Unauthorized("Unauthorized".to_string()).is_retryable());
        assert!(!TelegramError::Configuration("token".to_string()).is_retryable());
        assert!(!TelegramError::ParseError("garbage".to_string()).is_retryable());
        assert!(
            !TelegramError::Api {
                code: 400,
                description: "Bad Request: chat not found".to_string()
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_display() {
        let err = TelegramError::Api {
            code: 400,
            description: "Bad Request: chat not found".to_string(),
        };
        assert_eq!(err.to_string(), "Bot API error 400: Bad Request: chat not found");
    }
}
