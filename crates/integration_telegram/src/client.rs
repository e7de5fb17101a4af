//! Bot API client
//!
//! The bot token is part of the request URL, so transport errors are
//! stripped of their URL before they are reported.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::TelegramConfig;
use crate::error::TelegramError;

/// Trait for clients that deliver a text message to a fixed chat
#[async_trait]
pub trait TextSender: Send + Sync {
    /// Send one message; each call is a single attempt
    async fn send_text(&self, text: &str) -> Result<SentMessage, TelegramError>;
}

/// Message accepted by the Bot API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API answer is wrapped in
#[derive(Debug, Default, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    result: Option<SentMessage>,
    #[serde(default)]
    error_code: Option<u16>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<ResponseParameters>,
}

#[derive(Debug, Deserialize)]
struct ResponseParameters {
    #[serde(default)]
    retry_after: Option<u64>,
}

/// Telegram Bot API client bound to one chat
#[derive(Debug)]
pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
}

impl TelegramClient {
    /// Create a new Bot API client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &TelegramConfig) -> Result<Self, TelegramError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TelegramError::Configuration(e.without_url().to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn interpret(status: StatusCode, body: &str) -> Result<SentMessage, TelegramError> {
        let parsed: Option<ApiResponse> = serde_json::from_str(body).ok();

        if status.is_success() {
            return match parsed {
                Some(ApiResponse {
                    ok: true,
                    result: Some(message),
                    ..
                }) => Ok(message),
                Some(response) => Err(Self::api_error(status, response)),
                None => Err(TelegramError::ParseError(format!(
                    "unexpected answer to sendMessage ({} bytes)",
                    body.len()
                ))),
            };
        }

        Err(Self::api_error(status, parsed.unwrap_or_default()))
    }

    fn api_error(status: StatusCode, response: ApiResponse) -> TelegramError {
        let code = response.error_code.unwrap_or_else(|| status.as_u16());
        let description = response.description.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

        match code {
            401 => TelegramError::Unauthorized(description),
            429 => TelegramError::RateLimited {
                retry_after_secs: response.parameters.and_then(|p| p.retry_after),
            },
            _ => TelegramError::Api { code, description },
        }
    }
}

#[async_trait]
impl TextSender for TelegramClient {
    #[instrument(skip(self, text), fields(chat_id = %self.config.chat_id, len = text.len()))]
    async fn send_text(&self, text: &str) -> Result<SentMessage, TelegramError> {
        let request = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
        };

        debug!("Sending Telegram message");

        let response = self
            .client
            .post(self.config.send_message_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TelegramError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    TelegramError::ConnectionFailed(e.without_url().to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TelegramError::ParseError(e.without_url().to_string()))?;

        let result = Self::interpret(status, &body);
        match &result {
            Ok(message) => debug!(message_id = message.message_id, "Telegram message sent"),
            Err(e) => warn!(%status, error = %e, "Telegram rejected message"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpret_success() {
        let message = TelegramClient::interpret(
            StatusCode::OK,
            r#"{"ok":true,"result":{"message_id":7,"chat":{"id":42}}}"#,
        )
        .unwrap();
        assert_eq!(message.message_id, 7);
    }

    #[test]
    fn interpret_bad_request() {
        let err = TelegramClient::interpret(
            StatusCode::BAD_REQUEST,
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TelegramError::Api { code: 400, .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn interpret_unauthorized() {
        let err = TelegramClient::interpret(
            StatusCode::UNAUTHORIZED,
            r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, TelegramError::Unauthorized(_)));
    }

    #[test]
    fn interpret_rate_limit_with_retry_after() {
        let err = TelegramClient::interpret(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":5}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TelegramError::RateLimited {
                retry_after_secs: Some(5)
            }
        ));
    }

    #[test]
    fn interpret_gateway_error_without_json() {
        let err = TelegramClient::interpret(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert!(matches!(err, TelegramError::Api { code: 502, .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn interpret_garbage_on_success_status() {
        let err = TelegramClient::interpret(StatusCode::OK, "garbage").unwrap_err();
        assert!(matches!(err, TelegramError::ParseError(_)));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(SendMessageRequest {
            chat_id: "42",
            text: "hi",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"chat_id": "42", "text": "hi"}));
    }
}
