//! Configuration loading from environment variables.

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    /// `DATABASE_URL` takes precedence; otherwise the URL is assembled from
    /// the standard PostgreSQL variables:
    /// - `PGHOST`: database host
    /// - `PGPORT`: database port (defaults to 5432)
    /// - `PGDATABASE`: database name
    /// - `PGUSER`: database user
    /// - `PGPASSWORD`: database password
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        if let Ok(database_url) = std::env::var("DATABASE_URL") {
            return Ok(Self { database_url });
        }

        let host = std::env::var("PGHOST")
            .context("Neither DATABASE_URL nor PGHOST environment variable is set")?;
        let port = std::env::var("PGPORT").unwrap_or_else(|_| "5432".to_string());
        let database =
            std::env::var("PGDATABASE").context("PGDATABASE environment variable not set")?;
        let user = std::env::var("PGUSER").context("PGUSER environment variable not set")?;
        let password =
            std::env::var("PGPASSWORD").context("PGPASSWORD environment variable not set")?;

        Ok(Self {
            database_url: format!("postgres://{user}:{password}@{host}:{port}/{database}"),
        })
    }
}
