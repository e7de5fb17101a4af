//! Telegram bot configuration

use secrecy::{ExposeSecret, SecretString};

use crate::error::TelegramError;

/// Public Bot API host
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoint of the bot that delivers notifications
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather
    pub bot_token: SecretString,
    /// Chat the messages go to
    pub chat_id: String,
    /// Bot API host (default: https://api.telegram.org)
    pub api_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .field("chat_id", &self.chat_id)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TelegramConfig {
    /// Create a configuration for the public Bot API
    ///
    /// # Errors
    ///
    /// Returns an error if the token or the chat ID is blank.
    pub fn new(
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, TelegramError> {
        let config = Self {
            bot_token: SecretString::from(bot_token.into()),
            chat_id: chat_id.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Point the client at another Bot API host
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// URL of the `sendMessage` method for this bot
    pub(crate) fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.api_base_url.trim_end_matches('/'),
            self.bot_token.expose_secret()
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), TelegramError> {
        if self.bot_token.expose_secret().trim().is_empty() {
            return Err(TelegramError::Configuration(
                "bot token must not be empty".to_string(),
            ));
        }
        if self.chat_id.trim().is_empty() {
            return Err(TelegramError::Configuration(
                "chat ID must not be empty".to_string(),
            ));
        }
        if self.api_base_url.is_empty() {
            return Err(TelegramError::Configuration(
                "api_base_url must not be empty".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(TelegramError::Configuration(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
