//! HTTP client for the IMF SDMX-JSON data service.

use core::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

use crate::models::{CompactDataResponse, Observation};

/// Base URL for the IMF SDMX-JSON service
const API_BASE_URL: &str = "https://dataservices.imf.org/REST/SDMX_JSON.svc";

/// Request timeout in seconds
const REQUEST_TIMEOUT_SECONDS: u64 = 60;

/// Client for the IMF SDMX-JSON CompactData endpoint.
pub struct ImfClient {
    client: Client,
}

impl ImfClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECONDS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Fetches the observations for one series.
    ///
    /// # Arguments
    ///
    /// * `dataset` - Dataset identifier (e.g. "CPI", "IFS")
    /// * `key` - Dimension key (e.g. "USA.PCPI_IX")
    /// * `start_period` - First period to include (e.g. 2020)
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server responds with a
    /// non-success status, or the response cannot be decoded.
    pub async fn compact_data(
        &self,
        dataset: &str,
        key: &str,
        start_period: u16,
    ) -> Result<Vec<Observation>> {
        let url = format!("{API_BASE_URL}/CompactData/{dataset}/{key}?startPeriod={start_period}");

        info!(dataset, key, start_period, "Fetching series");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to IMF API")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        let data: CompactDataResponse = response
            .json()
            .await
            .context("Failed to parse CompactData response")?;

        let observations = data.into_observations();
        info!(dataset, key, count = observations.len(), "Received observations");

        Ok(observations)
    }
}
