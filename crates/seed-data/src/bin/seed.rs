//! Seeds the relay database with the built-in dataset (or `SEED_FIXTURE`).
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    load_dotenv();
    let config = SeedConfig::from_env()?;

    let dataset = match &config.fixture_path {
        Some(path) => {
            tracing::info!("Seeding from fixture {}", path.display());
            Dataset::from_path(path)?
        }
        None => Dataset::builtin(),
    };

    let seeder = Seeder::connect(&config).await?;

    // Release the connection whether or not seeding succeeded.
    let outcome = seed_and_count(&seeder, &dataset).await;
    seeder.close().await;
    let (report, counts) = outcome?;

    tracing::info!("{}", report);
    tracing::info!("  Runners: {}", counts.runners);
    tracing::info!("  Groups: {}", counts.groups);
    tracing::info!("  Faculties: {}", counts.faculties);
    tracing::info!("  Global state rows: {}", counts.global_state);
    tracing::info!("Dummy data inserted successfully.");

    Ok(())
}

async fn seed_and_count(
    seeder: &Seeder,
    dataset: &Dataset,
) -> Result<(SeedReport, TableCounts), SeedError> {
    let report = seeder.seed(dataset).await?;
    let counts = seeder.table_counts().await?;
    Ok((report, counts))
}
