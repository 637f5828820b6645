//! Errors raised while configuring or running a seeding pass.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to read fixture {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid fixture: {0}")]
    FixtureParse(#[from] serde_json::Error),
    #[error("{0} is not set")]
    MissingEnv(&'static str),
}
