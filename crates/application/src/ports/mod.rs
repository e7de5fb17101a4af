//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod availability_port;
mod notifier_port;

#[cfg(test)]
pub use availability_port::MockAvailabilityPort;
pub use availability_port::AvailabilityPort;
#[cfg(test)]
pub use notifier_port::MockNotifierPort;
pub use notifier_port::NotifierPort;
