//! Fetch command - retrieves IMF indicators and inserts scored evaluations.
//!
//! The batch is strictly sequential: for each country, each indicator is
//! fetched, scored, and inserted at most once. A failure for one indicator
//! is logged and counted as zero insertions; it never aborts the batch.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use database::{CreateEvaluation, EvaluationRepository, SettingsRepository, SourceRepository};
use evaluation_structs::{
    country_name, recency_score, source_trust_score, trust_score, Indicator, ScoringSettings,
    CONSENSUS_SCORE, IMF_SOURCE_DOMAIN, IMF_SOURCE_LABEL,
};
use imf_client::{latest_observation, year_from_period, ImfClient};
use sqlx::PgPool;
use tracing::{info, warn};

/// First period requested from the IMF for every series.
const START_PERIOD: u16 = 2020;

/// Runs the fetch command.
///
/// # Errors
///
/// Returns an error if scoring settings are missing or a database operation
/// outside the per-indicator fetch path fails.
pub async fn run(pool: &PgPool, countries: &[String]) -> Result<()> {
    info!("Starting IMF data fetch for {} countries", countries.len());

    let settings = SettingsRepository::load(pool)
        .await?
        .context("No scoring settings found")?;

    let client = ImfClient::new()?;
    let mut total_inserted = 0;

    for code in countries {
        let Some(name) = country_name(code) else {
            warn!("{code} not in country mapping, skipping");
            continue;
        };

        info!("Fetching {name} ({code})");

        for indicator in Indicator::ALL {
            match fetch_indicator(pool, &client, indicator, code, name, &settings).await {
                Ok(inserted) => total_inserted += inserted,
                Err(error) => {
                    warn!("{indicator} fetch failed for {code}: {error:#}");
                }
            }
        }
    }

    info!("Successfully inserted {total_inserted} IMF evaluations");

    Ok(())
}

/// Fetches one indicator for one country and inserts at most one evaluation.
///
/// Returns the number of records inserted (0 or 1).
async fn fetch_indicator(
    pool: &PgPool,
    client: &ImfClient,
    indicator: Indicator,
    country_code: &str,
    country_name: &str,
    settings: &ScoringSettings,
) -> Result<usize> {
    let key = format!("{country_code}.{}", indicator.series_code());
    let observations = client
        .compact_data(indicator.dataset_id(), &key, START_PERIOD)
        .await?;

    let Some(latest) = latest_observation(observations) else {
        info!("  no {indicator} observations for {country_code}");
        return Ok(0);
    };

    let value: f64 = latest
        .value
        .as_deref()
        .context("Observation has no value")?
        .parse()
        .context("Malformed observation value")?;

    let year = year_from_period(&latest.time_period)?;
    let evaluated_at = year_end(year).context("Period year out of range")?;
    let value_str = value.to_string();

    let attribute = indicator.attribute();
    let source_url = indicator.source_url();

    if EvaluationRepository::exists(pool, country_name, attribute, source_url, &value_str).await? {
        info!("  {indicator} already exists");
        return Ok(0);
    }

    let metrics = SourceRepository::find_by_domain(pool, IMF_SOURCE_DOMAIN).await?;
    let source_trust = source_trust_score(metrics.as_ref());
    let recency = recency_score(evaluated_at, Utc::now().date_naive(), settings);
    let trust = trust_score(source_trust, recency, CONSENSUS_SCORE, settings);

    EvaluationRepository::create(
        pool,
        CreateEvaluation {
            entity: country_name.to_string(),
            attribute: attribute.to_string(),
            value: value_str,
            value_type: "numeric".to_string(),
            source_url: source_url.to_string(),
            source_trust: IMF_SOURCE_LABEL.to_string(),
            source_trust_score: source_trust,
            recency_score: recency,
            consensus_score: CONSENSUS_SCORE,
            source_trust_weight: settings.source_trust_weight,
            recency_weight: settings.recency_weight,
            consensus_weight: settings.consensus_weight,
            trust_score: trust,
            evaluation_notes: Some(indicator.note(year)),
            evaluated_at,
        },
    )
    .await?;

    info!("  {indicator} = {value} ({year}), trust score {trust}");

    Ok(1)
}

/// Evaluation date for an annual observation: December 31 of its year.
fn year_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_end() {
        assert_eq!(
            year_end(2024),
            NaiveDate::from_ymd_opt(2024, 12, 31)
        );
        assert!(year_end(i32::MAX).is_none());
    }

    #[test]
    fn test_value_stringification_is_stable() {
        // The dedup tuple uses the stringified value; the same float must
        // always produce the same string across runs.
        let value: f64 = "313.689".parse().unwrap();
        assert_eq!(value.to_string(), "313.689");

        let whole: f64 = "125000.0".parse().unwrap();
        assert_eq!(whole.to_string(), "125000");
    }
}
