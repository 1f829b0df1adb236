//! Trust score computation.
//!
//! A trust score is a weighted blend of three 0-100 sub-scores: source
//! reliability, data recency, and consensus. Weights and recency tiers come
//! from [`ScoringSettings`].

use chrono::NaiveDate;

use crate::settings::ScoringSettings;
use crate::source::SourceMetrics;

/// Fixed consensus sub-score; multi-source consensus is not computed yet.
pub const CONSENSUS_SCORE: i32 = 95;

/// Source trust sub-score used when the domain is absent from `sources`.
pub const DEFAULT_SOURCE_TRUST_SCORE: i32 = 91;

/// Computes the source trust sub-score for a domain.
///
/// Rounded mean of the three reliability metrics, or
/// [`DEFAULT_SOURCE_TRUST_SCORE`] when the domain is unknown.
#[must_use]
pub fn source_trust_score(metrics: Option<&SourceMetrics>) -> i32 {
    metrics.map_or(DEFAULT_SOURCE_TRUST_SCORE, |m| {
        let sum = m.public_trust + m.data_accuracy + m.proprietary_score;
        (f64::from(sum) / 3.0).round() as i32
    })
}

/// Computes the recency sub-score for an evaluation date.
///
/// Age in whole days is measured from `evaluated_at` to `now` and mapped
/// onto the configured tiers; a boundary age still lands in the earlier
/// tier. `now` is passed in so results are reproducible.
#[must_use]
pub fn recency_score(evaluated_at: NaiveDate, now: NaiveDate, settings: &ScoringSettings) -> i32 {
    let days_old = (now - evaluated_at).num_days();

    if days_old <= i64::from(settings.recency_tier1_days) {
        settings.recency_tier1_score
    } else if days_old <= i64::from(settings.recency_tier2_days) {
        settings.recency_tier2_score
    } else {
        settings.recency_tier3_score
    }
}

/// Computes the final trust score as the rounded weighted mean of the three
/// sub-scores.
///
/// Returns 0 when all weights are zero.
#[must_use]
pub fn trust_score(
    source_trust: i32,
    recency: i32,
    consensus: i32,
    settings: &ScoringSettings,
) -> i32 {
    let total_weight =
        settings.source_trust_weight + settings.recency_weight + settings.consensus_weight;

    if total_weight == 0 {
        return 0;
    }

    let weighted_sum = source_trust * settings.source_trust_weight
        + recency * settings.recency_weight
        + consensus * settings.consensus_weight;

    (f64::from(weighted_sum) / f64::from(total_weight)).round() as i32
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn test_settings() -> ScoringSettings {
        ScoringSettings {
            source_trust_weight: 3,
            recency_weight: 1,
            consensus_weight: 1,
            recency_tier1_days: 30,
            recency_tier1_score: 100,
            recency_tier2_days: 90,
            recency_tier2_score: 80,
            recency_tier3_score: 50,
        }
    }

    fn days_ago(now: NaiveDate, days: u64) -> NaiveDate {
        now.checked_sub_days(Days::new(days)).unwrap()
    }

    #[test]
    fn test_source_trust_score_known_domain() {
        let metrics = SourceMetrics {
            domain: "www.imf.org".to_string(),
            public_trust: 92,
            data_accuracy: 95,
            proprietary_score: 90,
        };
        // round((92 + 95 + 90) / 3) = round(92.33) = 92
        assert_eq!(source_trust_score(Some(&metrics)), 92);
    }

    #[test]
    fn test_source_trust_score_rounds_up() {
        let metrics = SourceMetrics {
            domain: "example.org".to_string(),
            public_trust: 90,
            data_accuracy: 91,
            proprietary_score: 91,
        };
        // round(272 / 3) = round(90.67) = 91
        assert_eq!(source_trust_score(Some(&metrics)), 91);
    }

    #[test]
    fn test_source_trust_score_unknown_domain() {
        assert_eq!(source_trust_score(None), DEFAULT_SOURCE_TRUST_SCORE);
        assert_eq!(source_trust_score(None), 91);
    }

    #[test]
    fn test_recency_score_tiers() {
        let settings = test_settings();
        let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        assert_eq!(recency_score(days_ago(now, 10), now, &settings), 100);
        assert_eq!(recency_score(days_ago(now, 60), now, &settings), 80);
        assert_eq!(recency_score(days_ago(now, 200), now, &settings), 50);
    }

    #[test]
    fn test_recency_score_tier_boundaries() {
        let settings = test_settings();
        let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        // A boundary age lands in the earlier tier
        assert_eq!(recency_score(days_ago(now, 30), now, &settings), 100);
        assert_eq!(recency_score(days_ago(now, 31), now, &settings), 80);
        assert_eq!(recency_score(days_ago(now, 90), now, &settings), 80);
        assert_eq!(recency_score(days_ago(now, 91), now, &settings), 50);
    }

    #[test]
    fn test_recency_score_monotone_in_age() {
        let settings = test_settings();
        let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let mut previous = i32::MAX;
        for age in 0..400 {
            let score = recency_score(days_ago(now, age), now, &settings);
            assert!(score <= previous, "score increased at age {age}");
            previous = score;
        }
    }

    #[test]
    fn test_trust_score_weighted_mean() {
        let settings = test_settings();
        // round((90*3 + 100*1 + 95*1) / 5) = round(93.0) = 93
        assert_eq!(trust_score(90, 100, 95, &settings), 93);
    }

    #[test]
    fn test_trust_score_rounding() {
        let settings = ScoringSettings {
            source_trust_weight: 1,
            recency_weight: 1,
            consensus_weight: 0,
            ..test_settings()
        };
        // round((90 + 95) / 2) = round(92.5) = 93
        assert_eq!(trust_score(90, 95, 0, &settings), 93);
    }

    #[test]
    fn test_trust_score_zero_weights() {
        let settings = ScoringSettings {
            source_trust_weight: 0,
            recency_weight: 0,
            consensus_weight: 0,
            ..test_settings()
        };
        assert_eq!(trust_score(90, 100, 95, &settings), 0);
    }

    #[test]
    fn test_trust_score_single_weight() {
        let settings = ScoringSettings {
            source_trust_weight: 0,
            recency_weight: 5,
            consensus_weight: 0,
            ..test_settings()
        };
        assert_eq!(trust_score(90, 100, 95, &settings), 100);
    }
}
