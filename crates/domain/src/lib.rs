//! Domain layer for the ticket watcher
//!
//! Contains travel dates and their timestamp conversion, the departure
//! filter, the lookup table and the ticket query builder.
//! This layer performs no I/O.

pub mod departure_filter;
pub mod entities;
pub mod errors;
pub mod value_objects;

pub use departure_filter::{DepartureSelection, SearchWindow, select_departures};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
