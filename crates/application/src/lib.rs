//! Application layer - Use cases and orchestration
//!
//! Contains the ticket check use case, report formatting, the delivery
//! retry policy and the port definitions adapters implement.

pub mod error;
pub mod ports;
pub mod retry;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use retry::{RetryPolicy, RetryResult, Retryable, with_retry};
pub use services::*;
