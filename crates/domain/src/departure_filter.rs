//! Reconciling a requested date against the departures the API returned
//!
//! Two independent questions are answered in a single pass:
//!
//! - Which departures fall inside the search window around the requested
//!   day (one day before, two days after, compared as timestamps)?
//! - Does any departure's displayed date equal the requested date string?
//!
//! The second check is plain string equality on purpose. A departure that
//! lies on the requested day but is displayed in another format does not
//! count as an exact match.

use serde::{Deserialize, Serialize};

use crate::entities::Departure;
use crate::value_objects::{TravelCalendar, TravelDate};

/// One day in milliseconds
pub const DAY_MS: i64 = 86_400_000;

/// How far before the requested day the window reaches
pub const WINDOW_BEFORE_MS: i64 = DAY_MS;

/// How far after the requested day the window reaches
pub const WINDOW_AFTER_MS: i64 = 2 * DAY_MS;

/// Inclusive timestamp range used to pick nearby departures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub min_ms: i64,
    pub max_ms: i64,
}

impl SearchWindow {
    /// Window around a start-of-day timestamp
    #[must_use]
    pub const fn around(timestamp_ms: i64) -> Self {
        Self {
            min_ms: timestamp_ms.saturating_sub(WINDOW_BEFORE_MS),
            max_ms: timestamp_ms.saturating_add(WINDOW_AFTER_MS),
        }
    }

    /// Window around a travel date
    #[must_use]
    pub fn for_date(date: &TravelDate, calendar: &TravelCalendar) -> Self {
        Self::around(calendar.start_of_day_millis(date))
    }

    /// Check whether a timestamp lies inside the window, bounds included
    #[must_use]
    pub const fn contains(&self, timestamp_ms: i64) -> bool {
        self.min_ms <= timestamp_ms && timestamp_ms <= self.max_ms
    }
}

/// Result of filtering departures for a requested date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureSelection {
    /// Departures inside the search window, in API order
    pub nearby: Vec<Departure>,
    /// Whether some departure is displayed exactly as the requested date
    pub exact_match: bool,
}

/// Filter departures for a requested date
#[must_use]
pub fn select_departures(
    departures: &[Departure],
    requested: &TravelDate,
    calendar: &TravelCalendar,
) -> DepartureSelection {
    let window = SearchWindow::for_date(requested, calendar);
    let mut selection = DepartureSelection::default();

    for departure in departures {
        if window.contains(departure.scheduled_departure_ms) {
            selection.nearby.push(departure.clone());
        }
        if departure.displayed_departure == requested.as_str() {
            selection.exact_match = true;
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> TravelDate {
        TravelDate::parse(s).unwrap()
    }

    fn calendar() -> TravelCalendar {
        TravelCalendar::default()
    }

    fn departure_on(day: &str, offset_ms: i64) -> Departure {
        let ts = calendar().start_of_day_millis(&date(day)) + offset_ms;
        Departure::new(ts, day)
    }

    #[test]
    fn window_is_one_day_before_two_after() {
        let window = SearchWindow::around(10 * DAY_MS);
        assert_eq!(window.min_ms, 9 * DAY_MS);
        assert_eq!(window.max_ms, 12 * DAY_MS);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = SearchWindow::around(10 * DAY_MS);
        assert!(window.contains(9 * DAY_MS));
        assert!(window.contains(12 * DAY_MS));
        assert!(!window.contains(9 * DAY_MS - 1));
        assert!(!window.contains(12 * DAY_MS + 1));
    }

    #[test]
    fn window_saturates_at_extremes() {
        let window = SearchWindow::around(i64::MAX);
        assert_eq!(window.max_ms, i64::MAX);
        let window = SearchWindow::around(i64::MIN);
        assert_eq!(window.min_ms, i64::MIN);
    }

    #[test]
    fn empty_departures_yield_nothing() {
        let selection = select_departures(&[], &date("19/05/2024"), &calendar());
        assert!(selection.nearby.is_empty());
        assert!(!selection.exact_match);
    }

    #[test]
    fn neighbouring_days_without_exact_match() {
        let departures = vec![
            departure_on("18/05/2024", 8 * 3_600_000),
            departure_on("20/05/2024", 8 * 3_600_000),
            departure_on("21/05/2024", 0),
        ];

        let selection = select_departures(&departures, &date("19/05/2024"), &calendar());

        assert!(!selection.exact_match);
        assert_eq!(selection.nearby, departures);
    }

    #[test]
    fn exact_match_found() {
        let departures = vec![
            departure_on("19/05/2024", 7 * 3_600_000),
            departure_on("20/05/2024", 7 * 3_600_000),
        ];

        let selection = select_departures(&departures, &date("19/05/2024"), &calendar());

        assert!(selection.exact_match);
        assert_eq!(selection.nearby.len(), 2);
    }

    #[test]
    fn departures_outside_window_are_dropped_but_order_kept() {
        let departures = vec![
            departure_on("25/05/2024", 0),
            departure_on("20/05/2024", 0),
            departure_on("17/05/2024", 0),
            departure_on("18/05/2024", 0),
        ];

        let selection = select_departures(&departures, &date("19/05/2024"), &calendar());

        let shown: Vec<&str> = selection
            .nearby
            .iter()
            .map(|d| d.displayed_departure.as_str())
            .collect();
        assert_eq!(shown, vec!["20/05/2024", "18/05/2024"]);
    }

    #[test]
    fn exact_match_ignores_window() {
        // Displayed text matches even though the timestamp is far away
        let far = Departure::new(0, "19/05/2024");
        let selection = select_departures(&[far], &date("19/05/2024"), &calendar());
        assert!(selection.exact_match);
        assert!(selection.nearby.is_empty());
    }

    #[test]
    fn same_day_in_other_format_is_not_exact() {
        let ts = calendar().start_of_day_millis(&date("19/05/2024")) + 3_600_000;
        let departure = Departure::new(ts, "19/05/2024 07:00");
        let selection = select_departures(&[departure], &date("19/05/2024"), &calendar());
        assert!(!selection.exact_match);
        assert_eq!(selection.nearby.len(), 1);
    }
}
