//! Notifier port - delivering text to the user's chat

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for sending a text message to the configured conversation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NotifierPort: Send + Sync {
    /// Send one text message
    ///
    /// Each call is a single delivery attempt; retrying is the caller's job.
    async fn send_text(&self, text: &str) -> Result<(), ApplicationError>;
}
