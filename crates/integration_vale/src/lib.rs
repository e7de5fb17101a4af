//! Vale passenger train availability integration
//!
//! Queries the public `pesquisaDisponibilidadePortal` endpoint of the Vale
//! passenger train sales system for departures on a route.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_vale::{AvailabilityClient, ValeClient, ValeConfig};
//!
//! let client = ValeClient::new(&ValeConfig::default())?;
//! let answer = client.search_availability(&query).await?;
//! println!("{} outbound departures", answer.outbound.len());
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{AvailabilityClient, ValeClient};
pub use config::{DEFAULT_AVAILABILITY_URL, ValeConfig};
pub use error::ValeError;
pub use models::{AvailabilityRequest, AvailabilityResponse, RawDeparture, SaleDetail};
