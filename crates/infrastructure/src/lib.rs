//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the availability API and
//! Telegram clients, and loads configuration and the lookup table.

pub mod adapters;
pub mod catalog;
pub mod config;

pub use adapters::*;
pub use catalog::{CatalogError, DEFAULT_CATALOG_PATH, load_route_catalog, parse_route_catalog};
pub use config::{AppConfig, ConfigSources, ConfigurationError, TelegramAppConfig};
