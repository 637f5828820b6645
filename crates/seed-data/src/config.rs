//! Configuration for a seeding run.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::SeedError;

/// Environment variable holding the Postgres connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Optional path to a JSON fixture replacing the built-in dataset.
pub const FIXTURE_VAR: &str = "SEED_FIXTURE";

/// Loads a `.env` file from the current directory, if there is one.
///
/// Variables already present in the environment win over the file.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }
}

/// Configuration for seeding operations.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Postgres connection string.
    pub database_url: String,

    /// Fixture to seed instead of the built-in dataset.
    pub fixture_path: Option<PathBuf>,
}

impl SeedConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            fixture_path: None,
        }
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SeedError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or(SeedError::MissingEnv(DATABASE_URL_VAR))?;

        let mut config = Self::new(database_url);
        config.fixture_path = lookup(FIXTURE_VAR)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
