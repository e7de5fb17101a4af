//! Domain entities - Objects with identity and lifecycle

mod departure;
mod route_catalog;
mod ticket_query;

pub use departure::{Availability, Departure};
pub use route_catalog::RouteCatalog;
pub use ticket_query::{
    DEFAULT_CLASS, DEFAULT_DESTINATION, DEFAULT_ORIGIN, DEFAULT_RAILWAY, FULL_FARE_DETAIL_CODE,
    PassengerDetail, SearchRequest, TicketQuery,
};
