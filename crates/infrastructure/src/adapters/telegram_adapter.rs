//! Telegram notifier adapter
//!
//! Implements the `NotifierPort` trait using the Telegram integration crate.

use application::error::ApplicationError;
use application::ports::NotifierPort;
use async_trait::async_trait;
use integration_telegram::{TelegramClient, TelegramConfig, TelegramError, TextSender};
use tracing::{debug, instrument};

/// Adapter that implements `NotifierPort` using a Telegram bot
pub struct TelegramNotifierAdapter<S = TelegramClient> {
    sender: S,
}

impl<S> std::fmt::Debug for TelegramNotifierAdapter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifierAdapter")
            .field("sender", &std::any::type_name::<S>())
            .finish()
    }
}

impl TelegramNotifierAdapter {
    /// Create an adapter with a bot client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &TelegramConfig) -> Result<Self, TelegramError> {
        Ok(Self::new(TelegramClient::new(config)?))
    }
}

impl<S: TextSender> TelegramNotifierAdapter<S> {
    /// Wrap an existing sender
    pub const fn new(sender: S) -> Self {
        Self { sender }
    }
}

/// Map bot errors onto application errors
fn map_telegram_error(err: TelegramError) -> ApplicationError {
    match err {
        TelegramError::Unauthorized(msg) => ApplicationError::NotAuthorized(msg),
        TelegramError::Configuration(msg) => ApplicationError::Configuration(msg),
        TelegramError::RateLimited { .. } => ApplicationError::RateLimited,
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl<S: TextSender> NotifierPort for TelegramNotifierAdapter<S> {
    #[instrument(skip(self, text), fields(len = text.len()))]
    async fn send_text(&self, text: &str) -> Result<(), ApplicationError> {
        let sent = self
            .sender
            .send_text(text)
            .await
            .map_err(map_telegram_error)?;
        debug!(message_id = sent.message_id, "Notification accepted");
        Ok(())
    }
}
