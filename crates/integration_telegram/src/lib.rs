//! Telegram integration
//!
//! Sends plain text messages to one chat through the Bot API
//! [`sendMessage`](https://core.telegram.org/bots/api#sendmessage) method.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_telegram::{TelegramClient, TelegramConfig, TextSender};
//!
//! let config = TelegramConfig::new("123456:ABC", "987654321")?;
//! let client = TelegramClient::new(&config)?;
//! client.send_text("Hello").await?;
//! ```

mod client;
mod config;
mod error;

pub use client::{SentMessage, TelegramClient, TextSender};
pub use config::{DEFAULT_API_BASE_URL, TelegramConfig};
pub use error::TelegramError;
