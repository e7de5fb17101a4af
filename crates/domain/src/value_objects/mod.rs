//! Value Objects - Immutable, identity-less domain primitives

mod travel_calendar;
mod travel_date;

pub use travel_calendar::{DEFAULT_TIMEZONE, TravelCalendar};
pub use travel_date::{TRAVEL_DATE_FORMAT, TravelDate};
