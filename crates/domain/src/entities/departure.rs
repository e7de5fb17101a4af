//! Departures and availability answers returned by the railway

use serde::{Deserialize, Serialize};

/// One departure offered by the availability API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Scheduled departure in epoch milliseconds
    pub scheduled_departure_ms: i64,
    /// Departure as the API displays it (normally `DD/MM/YYYY`)
    pub displayed_departure: String,
}

impl Departure {
    /// Create a new departure
    #[must_use]
    pub fn new(scheduled_departure_ms: i64, displayed_departure: impl Into<String>) -> Self {
        Self {
            scheduled_departure_ms,
            displayed_departure: displayed_departure.into(),
        }
    }
}

/// A successful availability answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Origin station as described by the API
    pub origin_description: Option<String>,
    /// Destination station as described by the API
    pub destination_description: Option<String>,
    /// Outbound departures, in API order
    pub outbound: Vec<Departure>,
    /// Return departures, in API order (empty unless a return date was sent)
    pub inbound: Vec<Departure>,
}

impl Availability {
    /// Create an answer with outbound departures only
    #[must_use]
    pub fn outbound_only(outbound: Vec<Departure>) -> Self {
        Self {
            outbound,
            ..Self::default()
        }
    }

    /// Set the station descriptions
    #[must_use]
    pub fn with_descriptions(
        mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        self.origin_description = Some(origin.into());
        self.destination_description = Some(destination.into());
        self
    }

    /// Set the return departures
    #[must_use]
    pub fn with_inbound(mut self, inbound: Vec<Departure>) -> Self {
        self.inbound = inbound;
        self
    }
}
