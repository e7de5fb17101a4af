//! Availability API configuration

use serde::{Deserialize, Serialize};

/// Public availability search endpoint
pub const DEFAULT_AVAILABILITY_URL: &str = "https://tremdepassageiros.vale.com/sgpweb/rest/externo/VendaInternet/publico/pesquisaDisponibilidadePortal";

/// Configuration for the availability API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValeConfig {
    /// Full URL of the availability search endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification
    ///
    /// Only for hosts with a broken certificate chain. Never on by default.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_base_url() -> String {
    DEFAULT_AVAILABILITY_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ValeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

impl ValeConfig {
    /// Create a configuration pointing at a test server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            accept_invalid_certs: false,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must be an http(s) URL".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
