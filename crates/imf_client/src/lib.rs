//! HTTP client for the IMF SDMX-JSON data service.
//!
//! Queries the CompactData endpoint per dataset and dimension key and
//! flattens the response into a list of observations.

mod client;
mod models;
mod series;

pub use client::ImfClient;
pub use models::{CompactDataResponse, Observation};
pub use series::{latest_observation, year_from_period};
