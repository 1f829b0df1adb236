use serde::{Deserialize, Serialize};

/// Scoring weights and recency thresholds from the `scoring_settings` table.
///
/// Loaded once per run; the batch aborts if the table is empty.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScoringSettings {
    /// Weight applied to the source trust sub-score
    pub source_trust_weight: i32,

    /// Weight applied to the recency sub-score
    pub recency_weight: i32,

    /// Weight applied to the consensus sub-score
    pub consensus_weight: i32,

    /// Maximum age in days for the first recency tier
    pub recency_tier1_days: i32,

    /// Score awarded within the first recency tier
    pub recency_tier1_score: i32,

    /// Maximum age in days for the second recency tier
    pub recency_tier2_days: i32,

    /// Score awarded within the second recency tier
    pub recency_tier2_score: i32,

    /// Score awarded beyond the second recency tier
    pub recency_tier3_score: i32,
}
