//! Trust-scored macroeconomic fact ingestion
//!
//! Fetches inflation and GDP series from the IMF SDMX API and inserts
//! scored evaluation records into PostgreSQL.

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use database::{create_pool, run_migrations};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

/// Trust-scored macroeconomic fact ingestion
#[derive(Parser)]
#[command(name = "macro-facts")]
#[command(about = "Fetches IMF macroeconomic indicators and scores them into facts_evaluation")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch indicators for the configured countries and insert evaluations
    Fetch {
        /// Country codes to fetch (IMF alpha-3), defaults to the standard set
        #[arg(short, long, num_args = 1..)]
        countries: Option<Vec<String>>,
    },

    /// Run database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let pool = create_pool(&config.database_url).await?;

    let result = match cli.command {
        Commands::Fetch { countries } => {
            let countries = countries.unwrap_or_else(|| {
                evaluation_structs::DEFAULT_COUNTRIES
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            });
            commands::fetch::run(&pool, &countries).await
        }
        Commands::Migrate => {
            run_migrations(&pool).await?;
            info!("Migrations completed successfully");
            Ok(())
        }
    };

    // One connection for the whole run, closed before exit
    pool.close().await;

    result
}
