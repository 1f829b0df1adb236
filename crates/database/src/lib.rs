//! PostgreSQL access for evaluation records, sources, and scoring settings.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

mod models;
mod repositories;

pub use models::*;
pub use repositories::*;

/// Creates a connection pool to the `PostgreSQL` database.
///
/// The batch is strictly sequential, so the pool holds a single connection
/// for the lifetime of the run.
///
/// # Errors
///
/// Returns an error if the connection to the database fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
}

/// Runs all pending migrations.
///
/// # Errors
///
/// Returns an error if running migrations fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
