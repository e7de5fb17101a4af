//! Availability API client
//!
//! Sends one JSON POST per search. A non-success status is reported
//! without reading the body.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Availability, TicketQuery};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

use crate::config::ValeConfig;
use crate::error::ValeError;
use crate::models::{AvailabilityRequest, AvailabilityResponse};

/// Trait for availability API clients
#[async_trait]
pub trait AvailabilityClient: Send + Sync {
    /// Search departures for a resolved ticket query
    async fn search_availability(&self, query: &TicketQuery) -> Result<Availability, ValeError>;
}

/// HTTP client for the Vale availability endpoint
#[derive(Debug)]
pub struct ValeClient {
    client: Client,
    config: ValeConfig,
}

impl ValeClient {
    /// Create a new availability client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ValeConfig) -> Result<Self, ValeError> {
        if config.accept_invalid_certs {
            warn!(url = %config.base_url, "TLS certificate verification is disabled");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| ValeError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Endpoint the client posts to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.base_url
    }

    fn parse_response(body: &str) -> Result<Availability, ValeError> {
        let raw: AvailabilityResponse =
            serde_json::from_str(body).map_err(|e| ValeError::ParseError(e.to_string()))?;
        Ok(raw.into())
    }
}

#[async_trait]
impl AvailabilityClient for ValeClient {
    #[instrument(skip(self, query), fields(origin = query.origin_code, destination = query.destination_code))]
    async fn search_availability(&self, query: &TicketQuery) -> Result<Availability, ValeError> {
        let body = AvailabilityRequest::from(query);
        debug!(?body, "Searching availability");

        let response = self
            .client
            .post(self.endpoint())
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ValeError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    ValeError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Availability search rejected");
            return Err(ValeError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ValeError::ParseError(e.to_string()))?;

        let availability = Self::parse_response(&text)?;
        debug!(
            outbound = availability.outbound.len(),
            inbound = availability.inbound.len(),
            "Availability received"
        );
        Ok(availability)
    }
}
