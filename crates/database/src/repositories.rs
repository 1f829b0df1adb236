//! Repository functions for database operations.

use evaluation_structs::{ScoringSettings, SourceMetrics};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateEvaluation, Evaluation, EvaluationStatus};

/// Repository for scoring settings.
pub struct SettingsRepository;

impl SettingsRepository {
    /// Loads the scoring settings row.
    ///
    /// Returns `None` when the table is empty; the caller treats that as
    /// fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn load(pool: &PgPool) -> Result<Option<ScoringSettings>, sqlx::Error> {
        sqlx::query_as::<_, ScoringSettings>(
            r"
            SELECT source_trust_weight, recency_weight, consensus_weight,
                   recency_tier1_days, recency_tier1_score,
                   recency_tier2_days, recency_tier2_score,
                   recency_tier3_score
            FROM scoring_settings
            LIMIT 1
            ",
        )
        .fetch_optional(pool)
        .await
    }
}

/// Repository for source reliability metrics.
pub struct SourceRepository;

impl SourceRepository {
    /// Finds reliability metrics for a source domain.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn find_by_domain(
        pool: &PgPool,
        domain: &str,
    ) -> Result<Option<SourceMetrics>, sqlx::Error> {
        sqlx::query_as::<_, SourceMetrics>(
            r"
            SELECT domain, public_trust, data_accuracy, proprietary_score
            FROM sources
            WHERE domain = $1
            ",
        )
        .bind(domain)
        .fetch_optional(pool)
        .await
    }
}

/// Repository for evaluation records.
pub struct EvaluationRepository;

impl EvaluationRepository {
    /// Checks whether an evaluation with the same
    /// (entity, attribute, source URL, value) tuple already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn exists(
        pool: &PgPool,
        entity: &str,
        attribute: &str,
        source_url: &str,
        value: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM facts_evaluation
                WHERE entity = $1 AND attribute = $2 AND source_url = $3 AND value = $4
            )
            ",
        )
        .bind(entity)
        .bind(attribute)
        .bind(source_url)
        .bind(value)
        .fetch_one(pool)
        .await
    }

    /// Creates a new evaluation record with status `evaluating`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn create(
        pool: &PgPool,
        input: CreateEvaluation,
    ) -> Result<Evaluation, sqlx::Error> {
        let id = Uuid::new_v4();

        sqlx::query_as::<_, Evaluation>(
            r"
            INSERT INTO facts_evaluation
                (id, entity, attribute, value, value_type, source_url, source_trust,
                 source_trust_score, recency_score, consensus_score,
                 source_trust_weight, recency_weight, consensus_weight,
                 trust_score, evaluation_notes, evaluated_at, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id, entity, attribute, value, value_type, source_url, source_trust,
                      source_trust_score, recency_score, consensus_score,
                      source_trust_weight, recency_weight, consensus_weight,
                      trust_score, evaluation_notes, evaluated_at, status, created_at
            ",
        )
        .bind(id)
        .bind(input.entity)
        .bind(input.attribute)
        .bind(input.value)
        .bind(input.value_type)
        .bind(input.source_url)
        .bind(input.source_trust)
        .bind(input.source_trust_score)
        .bind(input.recency_score)
        .bind(input.consensus_score)
        .bind(input.source_trust_weight)
        .bind(input.recency_weight)
        .bind(input.consensus_weight)
        .bind(input.trust_score)
        .bind(input.evaluation_notes)
        .bind(input.evaluated_at)
        .bind(EvaluationStatus::Evaluating)
        .fetch_one(pool)
        .await
    }
}
