//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod availability_adapter;
mod telegram_adapter;

pub use availability_adapter::ValeAvailabilityAdapter;
pub use telegram_adapter::TelegramNotifierAdapter;
