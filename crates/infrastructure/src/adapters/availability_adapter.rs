//! Availability adapter - Implements AvailabilityPort using integration_vale

use application::error::ApplicationError;
use application::ports::AvailabilityPort;
use async_trait::async_trait;
use domain::{Availability, TicketQuery};
use integration_vale::{AvailabilityClient, ValeClient, ValeConfig, ValeError};
use tracing::instrument;

/// Adapter querying the Vale availability API
pub struct ValeAvailabilityAdapter<C = ValeClient> {
    client: C,
}

impl<C> std::fmt::Debug for ValeAvailabilityAdapter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValeAvailabilityAdapter")
            .field("client", &std::any::type_name::<C>())
            .finish()
    }
}

impl ValeAvailabilityAdapter {
    /// Create an adapter with an HTTP client built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &ValeConfig) -> Result<Self, ValeError> {
        Ok(Self::new(ValeClient::new(config)?))
    }
}

impl<C: AvailabilityClient> ValeAvailabilityAdapter<C> {
    /// Wrap an existing client
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    fn map_error(err: ValeError) -> ApplicationError {
        match err {
            ValeError::HttpStatus { status } => ApplicationError::UpstreamStatus { status },
            ValeError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(format!("Availability search failed: {other}")),
        }
    }
}

#[async_trait]
impl<C: AvailabilityClient> AvailabilityPort for ValeAvailabilityAdapter<C> {
    #[instrument(skip(self, query))]
    async fn search(&self, query: &TicketQuery) -> Result<Availability, ApplicationError> {
        self.client
            .search_availability(query)
            .await
            .map_err(Self::map_error)
    }
}
