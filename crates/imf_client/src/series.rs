//! Helpers for selecting and interpreting observations.

use anyhow::{Context, Result};

use crate::models::Observation;

/// Returns the most recent observation, by period label descending.
///
/// SDMX period labels within one frequency sort lexicographically in
/// chronological order ("2023" < "2024", "2024-Q1" < "2024-Q3").
#[must_use]
pub fn latest_observation(mut observations: Vec<Observation>) -> Option<Observation> {
    observations.sort_by(|a, b| b.time_period.cmp(&a.time_period));
    observations.into_iter().next()
}

/// Derives the year from a period label.
///
/// Handles scalar annual labels ("2024") and composite sub-annual labels
/// ("2024-Q3", "2024-M11") by reading the leading four digits.
///
/// # Errors
///
/// Returns an error if the label does not start with a four-digit year.
pub fn year_from_period(period: &str) -> Result<i32> {
    period
        .get(..4)
        .and_then(|year| year.parse::<i32>().ok())
        .with_context(|| format!("Malformed period label: {period:?}"))
}
