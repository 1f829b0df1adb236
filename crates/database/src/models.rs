//! Database model types.

use sqlx::types::chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Evaluation status enum matching the `PostgreSQL` type.
///
/// This job only ever inserts `Evaluating`; later pipeline stages move
/// records through the remaining states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "evaluation_status", rename_all = "snake_case")]
pub enum EvaluationStatus {
    Evaluating,
    Verified,
    Rejected,
}

/// A scored observation of an attribute for an entity from a specific source.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Evaluation {
    pub id: Uuid,
    pub entity: String,
    pub attribute: String,
    pub value: String,
    pub value_type: String,
    pub source_url: String,
    pub source_trust: String,
    pub source_trust_score: i32,
    pub recency_score: i32,
    pub consensus_score: i32,
    pub source_trust_weight: i32,
    pub recency_weight: i32,
    pub consensus_weight: i32,
    pub trust_score: i32,
    pub evaluation_notes: Option<String>,
    pub evaluated_at: NaiveDate,
    pub status: EvaluationStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new evaluation record.
#[derive(Debug, Clone)]
pub struct CreateEvaluation {
    pub entity: String,
    pub attribute: String,
    pub value: String,
    pub value_type: String,
    pub source_url: String,
    pub source_trust: String,
    pub source_trust_score: i32,
    pub recency_score: i32,
    pub consensus_score: i32,
    pub source_trust_weight: i32,
    pub recency_weight: i32,
    pub consensus_weight: i32,
    pub trust_score: i32,
    pub evaluation_notes: Option<String>,
    pub evaluated_at: NaiveDate,
}
