//! Availability port - ticket availability lookups

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use domain::{Availability, TicketQuery};

use crate::error::ApplicationError;

/// Port for querying ticket availability on a route
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AvailabilityPort: Send + Sync {
    /// Search departures matching a resolved ticket query
    ///
    /// A non-success HTTP answer is reported as
    /// [`ApplicationError::UpstreamStatus`] without parsing the body.
    async fn search(&self, query: &TicketQuery) -> Result<Availability, ApplicationError>;
}
