//! Application services - Use case implementations

pub mod report_formatter;
mod ticket_check_service;

pub use report_formatter::{LegReport, QUERY_FAILED_MESSAGE, format_availability_report};
pub use ticket_check_service::{CheckReport, DeliveryOutcome, QueryOutcome, TicketCheckService};
