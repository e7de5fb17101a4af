//! Search request and the resolved ticket query sent to the railway

use serde::{Deserialize, Serialize};

use super::RouteCatalog;
use crate::errors::DomainError;
use crate::value_objects::{TravelCalendar, TravelDate};

/// Railway every query is made against
pub const DEFAULT_RAILWAY: &str = "Estrada de Ferro Vitoria a Minas";

/// Default boarding station
pub const DEFAULT_ORIGIN: &str = "Governador Valadares";

/// Default destination station
pub const DEFAULT_DESTINATION: &str = "Pedro Nolasco";

/// Default travel class
pub const DEFAULT_CLASS: &str = "Executiva";

/// Sale detail code for a full-fare adult passenger
pub const FULL_FARE_DETAIL_CODE: u32 = 33;

/// What the user asked for, using human names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Outbound travel date
    pub outbound_date: TravelDate,
    /// Optional return travel date
    pub return_date: Option<TravelDate>,
    /// Boarding station name
    pub origin: String,
    /// Destination station name
    pub destination: String,
    /// Travel class name
    pub class_name: String,
    /// Number of passengers
    pub passengers: u32,
}

impl SearchRequest {
    /// Create a request on the default route for one passenger
    #[must_use]
    pub fn new(outbound_date: TravelDate) -> Self {
        Self {
            outbound_date,
            return_date: None,
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            class_name: DEFAULT_CLASS.to_string(),
            passengers: 1,
        }
    }

    /// Set origin and destination
    #[must_use]
    pub fn with_route(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.origin = origin.into();
        self.destination = destination.into();
        self
    }

    /// Set the travel class
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Set the passenger count
    #[must_use]
    pub const fn with_passengers(mut self, passengers: u32) -> Self {
        self.passengers = passengers;
        self
    }

    /// Set the return date
    #[must_use]
    pub fn with_return_date(mut self, return_date: TravelDate) -> Self {
        self.return_date = Some(return_date);
        self
    }
}

/// One sale detail line of a ticket query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDetail {
    /// Fare category code
    pub detail_code: u32,
    /// Number of passengers in this category
    pub quantity: u32,
    /// Whether the passengers are railway employees
    pub employee: bool,
}

/// A search request resolved to API codes and timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketQuery {
    pub railway_code: u32,
    pub origin_code: u32,
    pub destination_code: u32,
    pub class_code: u32,
    /// Start of the outbound day, epoch milliseconds
    pub outbound_ms: i64,
    /// Start of the return day, epoch milliseconds
    pub return_ms: Option<i64>,
    pub passengers: Vec<PassengerDetail>,
}

impl TicketQuery {
    /// Resolve a search request against the lookup table
    ///
    /// # Errors
    ///
    /// Returns `UnknownLookupKey` when the railway, a station or the class is
    /// not in the catalog, and `ValidationError` for a zero passenger count.
    pub fn build(
        request: &SearchRequest,
        catalog: &RouteCatalog,
        calendar: &TravelCalendar,
    ) -> Result<Self, DomainError> {
        if request.passengers == 0 {
            return Err(DomainError::ValidationError(
                "passenger count must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            railway_code: catalog.railway_code(DEFAULT_RAILWAY)?,
            origin_code: catalog.location_code(&request.origin)?,
            destination_code: catalog.location_code(&request.destination)?,
            class_code: catalog.class_code(&request.class_name)?,
            outbound_ms: calendar.start_of_day_millis(&request.outbound_date),
            return_ms: request
                .return_date
                .as_ref()
                .map(|date| calendar.start_of_day_millis(date)),
            passengers: vec![PassengerDetail {
                detail_code: FULL_FARE_DETAIL_CODE,
                quantity: request.passengers,
                employee: false,
            }],
        })
    }
}
