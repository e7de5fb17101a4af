//! Telegram endpoint settings and bot credentials

use integration_telegram::{DEFAULT_API_BASE_URL, TelegramConfig};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::ConfigurationError;

/// Environment variable holding the bot token
pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable holding the target chat
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Telegram configuration
///
/// The credentials normally come from `TELEGRAM_BOT_TOKEN` and
/// `TELEGRAM_CHAT_ID`; the remaining fields only matter for self-hosted
/// Bot API servers.
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// Target chat ID
    #[serde(default)]
    pub chat_id: Option<String>,

    /// Bot API host (default: https://api.telegram.org)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for TelegramAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramAppConfig")
            .field(
                "bot_token",
                &if self.bot_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("chat_id", &self.chat_id)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TelegramAppConfig {
    /// Validate the endpoint settings
    ///
    /// Missing credentials are reported by [`Self::client_config`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.is_empty() {
            return Err("api_base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Build the client configuration
    ///
    /// # Errors
    ///
    /// Returns `MissingSecret` when the token or the chat ID is absent or
    /// blank.
    pub fn client_config(&self) -> Result<TelegramConfig, ConfigurationError> {
        let token = self
            .bot_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigurationError::MissingSecret(BOT_TOKEN_VAR))?;
        let chat_id = self
            .chat_id
            .as_deref()
            .filter(|chat| !chat.trim().is_empty())
            .ok_or(ConfigurationError::MissingSecret(CHAT_ID_VAR))?;

        let config = TelegramConfig::new(token, chat_id)
            .map_err(|e| ConfigurationError::invalid("telegram", e.to_string()))?
            .with_api_base_url(self.api_base_url.clone())
            .with_timeout_secs(self.timeout_secs);
        config
            .validate()
            .map_err(|e| ConfigurationError::invalid("telegram", e.to_string()))?;
        Ok(config)
    }
}
