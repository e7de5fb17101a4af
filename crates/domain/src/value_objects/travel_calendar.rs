//! Conversion between travel dates and API timestamps

use chrono::{DateTime, LocalResult, NaiveTime, TimeDelta, TimeZone};
use chrono_tz::Tz;

use super::TravelDate;
use crate::errors::DomainError;

/// Time zone the railway publishes its timetable in
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Longest daylight-saving gap searched when midnight does not exist
const MAX_GAP_SECONDS: i64 = 3 * 3600;

/// Converts [`TravelDate`]s to and from epoch milliseconds
///
/// A date maps to the first instant of that day in the calendar's zone.
/// Converting a timestamp back discards the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelCalendar {
    tz: Tz,
}

impl Default for TravelCalendar {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl TravelCalendar {
    /// Create a calendar for the given zone
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Create a calendar from an IANA zone name such as `America/Sao_Paulo`
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        name.parse::<Tz>()
            .map(Self::new)
            .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
    }

    /// The zone used for conversions
    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }

    /// Milliseconds since the epoch at the start of `date`
    #[must_use]
    pub fn start_of_day_millis(&self, date: &TravelDate) -> i64 {
        let midnight = date.naive().and_time(NaiveTime::MIN);

        let start_of_day = match self.tz.from_local_datetime(&midnight) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            // Midnight falls in a DST gap: the day starts at the first
            // local second that exists after it.
            LocalResult::None => (1..=MAX_GAP_SECONDS)
                .find_map(|s| {
                    self.tz
                        .from_local_datetime(&(midnight + TimeDelta::seconds(s)))
                        .earliest()
                })
                .unwrap_or_else(|| self.tz.from_utc_datetime(&midnight)),
        };

        start_of_day.timestamp_millis()
    }

    /// Calendar date of an epoch-milliseconds timestamp in this zone
    pub fn travel_date_at(&self, timestamp_ms: i64) -> Result<TravelDate, DomainError> {
        let instant = DateTime::from_timestamp_millis(timestamp_ms)
            .ok_or(DomainError::InvalidTimestamp(timestamp_ms))?;

        TravelDate::from_naive(instant.with_timezone(&self.tz).date_naive())
            .map_err(|_| DomainError::InvalidTimestamp(timestamp_ms))
    }
}
