//! Application configuration
//!
//! Settings are layered, later sources winning:
//! 1. built-in defaults
//! 2. `ticket-watch.toml` in the working directory, or an explicit file
//! 3. `TICKET_WATCH__SECTION__KEY` environment variables
//! 4. the Telegram credentials, from an env file (`KEY=VALUE` lines) and
//!    then the process environment
//!
//! Sub-modules:
//! - `telegram`: bot endpoint and credentials

mod telegram;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use application::RetryPolicy;
use domain::{DEFAULT_TIMEZONE, DomainError, TravelCalendar};
use integration_vale::ValeConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub use telegram::{BOT_TOKEN_VAR, CHAT_ID_VAR, TelegramAppConfig};

/// Configuration file looked up when none is given (any supported extension)
pub const DEFAULT_CONFIG_NAME: &str = "ticket-watch";

/// Prefix of environment overrides
pub const ENV_PREFIX: &str = "TICKET_WATCH";

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A required secret is not set anywhere
    #[error("Missing required setting {0}")]
    MissingSecret(&'static str),

    /// A section failed validation
    #[error("Invalid {section} configuration: {message}")]
    Invalid {
        section: &'static str,
        message: String,
    },

    /// The configured time zone is unknown
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ConfigurationError {
    pub(crate) fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
        }
    }
}

/// Where configuration is read from
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Explicit configuration file; must exist when given
    pub config_file: Option<PathBuf>,
    /// Env file with `KEY=VALUE` lines; skipped when missing
    pub env_file: Option<PathBuf>,
    /// Variables to use instead of the process environment
    pub environment: Option<HashMap<String, String>>,
}

impl ConfigSources {
    /// Read the given env file in addition to the defaults
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Read the given configuration file instead of `ticket-watch.*`
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Replace the process environment
    #[must_use]
    pub fn with_environment(mut self, environment: HashMap<String, String>) -> Self {
        self.environment = Some(environment);
        self
    }

    fn env_var(&self, key: &str) -> Option<String> {
        match &self.environment {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Availability API client
    #[serde(default)]
    pub availability: ValeConfig,

    /// Telegram bot
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Notification delivery retry policy
    #[serde(default)]
    pub delivery: RetryPolicy,

    /// IANA time zone used to turn dates into timestamps
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            availability: ValeConfig::default(),
            telegram: TelegramAppConfig::default(),
            delivery: RetryPolicy::default(),
            timezone: default_timezone(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from the given sources
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a section is invalid.
    /// Missing Telegram credentials are not an error here.
    pub fn load(sources: &ConfigSources) -> Result<Self, ConfigurationError> {
        let file = match &sources.config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(sources.environment.clone()),
            );

        let mut app: Self = builder.build()?.try_deserialize()?;
        app.apply_credentials(sources)?;
        app.validate()?;

        debug!(config = ?app, "Configuration loaded");
        Ok(app)
    }

    /// Fill the Telegram credentials from the env file and the environment
    fn apply_credentials(&mut self, sources: &ConfigSources) -> Result<(), ConfigurationError> {
        let file_values = match &sources.env_file {
            Some(path) if path.is_file() => read_env_file(path)?,
            Some(path) => {
                debug!(path = %path.display(), "Env file not found, skipping");
                HashMap::new()
            },
            None => HashMap::new(),
        };

        let lookup = |key: &str| {
            sources
                .env_var(key)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| file_values.get(&key.to_ascii_lowercase()).cloned())
        };

        if let Some(token) = lookup(BOT_TOKEN_VAR) {
            self.telegram.bot_token = Some(SecretString::from(token));
        }
        if let Some(chat_id) = lookup(CHAT_ID_VAR) {
            self.telegram.chat_id = Some(chat_id);
        }
        Ok(())
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first invalid section.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.availability
            .validate()
            .map_err(|e| ConfigurationError::invalid("availability", e))?;
        self.telegram
            .validate()
            .map_err(|e| ConfigurationError::invalid("telegram", e))?;
        self.delivery
            .validate()
            .map_err(|e| ConfigurationError::invalid("delivery", e))?;
        self.calendar()?;

        if self.availability.accept_invalid_certs {
            warn!("TLS certificate verification disabled for the availability API");
        }
        Ok(())
    }

    /// Calendar for the configured time zone
    ///
    /// # Errors
    ///
    /// Returns an error if the time zone name is unknown.
    pub fn calendar(&self) -> Result<TravelCalendar, ConfigurationError> {
        Ok(TravelCalendar::from_name(&self.timezone)?)
    }
}

/// Read `KEY=VALUE` lines; keys are returned lowercased
fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigurationError> {
    let values: HashMap<String, String> = config::Config::builder()
        .add_source(config::File::from(path).format(config::FileFormat::Ini))
        .build()?
        .try_deserialize()?;

    debug!(path = %path.display(), keys = values.len(), "Env file read");
    Ok(values
        .into_iter()
        .map(|(key, value)| (key.to_ascii_lowercase(), value))
        .collect())
}
