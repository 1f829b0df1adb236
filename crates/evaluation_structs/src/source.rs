use serde::{Deserialize, Serialize};

/// Domain used to look up IMF reliability metrics in the `sources` table.
pub const IMF_SOURCE_DOMAIN: &str = "www.imf.org";

/// Label stored in the `source_trust` column of inserted evaluations.
pub const IMF_SOURCE_LABEL: &str = "IMF";

/// Reliability metrics for a source domain from the `sources` table.
///
/// Each metric is on a 0-100 scale.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SourceMetrics {
    /// Source domain (e.g. `www.imf.org`)
    pub domain: String,

    /// Public trust in the source
    pub public_trust: i32,

    /// Historical accuracy of published data
    pub data_accuracy: i32,

    /// Proprietary reliability score
    pub proprietary_score: i32,
}
