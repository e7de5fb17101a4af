//! Ticket check use case
//!
//! One run resolves the search request, queries availability, formats the
//! report and delivers it. Lookup and validation failures end the run;
//! upstream failures become the generic failure message; delivery failures
//! are retried and then only reported.

use std::sync::Arc;

use domain::{
    Availability, Departure, DepartureSelection, RouteCatalog, SearchRequest, TicketQuery,
    TravelCalendar, select_departures,
};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AvailabilityPort, NotifierPort};
use crate::retry::{RetryPolicy, Retryable, with_retry};
use crate::services::report_formatter::{
    LegReport, QUERY_FAILED_MESSAGE, format_availability_report,
};

/// What the availability query told us about the outbound date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// A departure is displayed exactly as the requested date
    Found,
    /// No exact match; departures inside the search window instead
    NotFound { nearby: Vec<Departure> },
    /// The availability API could not be queried
    QueryFailed,
}

impl QueryOutcome {
    fn from_selection(selection: &DepartureSelection) -> Self {
        if selection.exact_match {
            Self::Found
        } else {
            Self::NotFound {
                nearby: selection.nearby.clone(),
            }
        }
    }
}

/// Result of delivering the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryOutcome {
    /// Number of send attempts made
    pub attempts: u32,
    /// Whether one attempt succeeded
    pub delivered: bool,
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub message: String,
    pub outcome: QueryOutcome,
    pub delivery: DeliveryOutcome,
}

/// Notifier error seen by the delivery loop
///
/// Every failed send is retried until the policy's bound, whatever the cause.
#[derive(Debug)]
struct SendFailure(ApplicationError);

impl std::fmt::Display for SendFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Retryable for SendFailure {
    fn is_retryable(&self) -> bool {
        true
    }
}

/// Service checking ticket availability and notifying the user
pub struct TicketCheckService {
    availability: Arc<dyn AvailabilityPort>,
    notifier: Arc<dyn NotifierPort>,
    catalog: RouteCatalog,
    calendar: TravelCalendar,
    retry_policy: RetryPolicy,
}

impl std::fmt::Debug for TicketCheckService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketCheckService")
            .field("calendar", &self.calendar)
            .field("retry_policy", &self.retry_policy)
            .field("locations", &self.catalog.location_names().len())
            .finish_non_exhaustive()
    }
}

impl TicketCheckService {
    /// Create a service with the default calendar and retry policy
    #[must_use]
    pub fn new(
        availability: Arc<dyn AvailabilityPort>,
        notifier: Arc<dyn NotifierPort>,
        catalog: RouteCatalog,
    ) -> Self {
        Self {
            availability,
            notifier,
            catalog,
            calendar: TravelCalendar::default(),
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Use another time zone for date conversion
    #[must_use]
    pub const fn with_calendar(mut self, calendar: TravelCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Use another delivery retry policy
    #[must_use]
    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Resolve a search request into API codes and timestamps
    ///
    /// # Errors
    ///
    /// Returns a domain error for unknown names or a zero passenger count.
    pub fn build_query(&self, request: &SearchRequest) -> Result<TicketQuery, ApplicationError> {
        Ok(TicketQuery::build(request, &self.catalog, &self.calendar)?)
    }

    /// Query availability and format the report
    ///
    /// # Errors
    ///
    /// Returns an error only when the request cannot be resolved. Upstream
    /// failures are folded into [`QUERY_FAILED_MESSAGE`].
    #[instrument(skip(self, request), fields(date = %request.outbound_date))]
    pub async fn prepare_message(
        &self,
        request: &SearchRequest,
    ) -> Result<(String, QueryOutcome), ApplicationError> {
        let query = self.build_query(request)?;
        debug!(?query, "Resolved ticket query");

        let availability = match self.availability.search(&query).await {
            Ok(availability) => availability,
            Err(e) => {
                warn!(error = %e, "Availability query failed");
                return Ok((QUERY_FAILED_MESSAGE.to_string(), QueryOutcome::QueryFailed));
            },
        };

        Ok(self.summarize(request, &availability))
    }

    fn summarize(
        &self,
        request: &SearchRequest,
        availability: &Availability,
    ) -> (String, QueryOutcome) {
        let outbound =
            select_departures(&availability.outbound, &request.outbound_date, &self.calendar);
        info!(
            departures = availability.outbound.len(),
            nearby = outbound.nearby.len(),
            exact_match = outbound.exact_match,
            "Filtered outbound departures"
        );

        let inbound = request
            .return_date
            .as_ref()
            .filter(|_| !availability.inbound.is_empty())
            .map(|date| {
                let selection = select_departures(&availability.inbound, date, &self.calendar);
                (date, selection)
            });

        let message = format_availability_report(
            request,
            availability,
            LegReport {
                date: &request.outbound_date,
                selection: &outbound,
            },
            inbound
                .as_ref()
                .map(|(date, selection)| LegReport { date: *date, selection }),
        );

        (message, QueryOutcome::from_selection(&outbound))
    }

    /// Send the message, retrying per the policy
    ///
    /// Exhaustion is logged and reported in the outcome, never raised.
    #[instrument(skip(self, message))]
    pub async fn deliver(&self, message: &str) -> DeliveryOutcome {
        let result = with_retry(&self.retry_policy, || async {
            self.notifier.send_text(message).await.map_err(SendFailure)
        })
        .await;

        if let Err(e) = &result.result {
            error!(
                attempts = result.attempts,
                error = %e,
                "Giving up on notification delivery"
            );
        } else {
            info!(attempts = result.attempts, "Notification delivered");
        }

        DeliveryOutcome {
            attempts: result.attempts,
            delivered: result.is_ok(),
        }
    }

    /// Run one complete check
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be resolved against the
    /// lookup table. Nothing is sent in that case.
    pub async fn run(&self, request: &SearchRequest) -> Result<CheckReport, ApplicationError> {
        let (message, outcome) = self.prepare_message(request).await?;
        let delivery = self.deliver(&message).await;

        Ok(CheckReport {
            message,
            outcome,
            delivery,
        })
    }
}
