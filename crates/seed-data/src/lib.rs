//! Seeding for the relay database.
//!
//! This crate inserts a fixed set of runners, groups, faculties and the global
//! state row into an existing Postgres schema. Every insert skips rows whose
//! natural key already exists, so seeding can be repeated safely.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let seeder = Seeder::connect(&config).await?;
//! let result = seeder.seed(&Dataset::builtin()).await;
//! seeder.close().await;
//! let report = result?;
//! ```

pub mod config;
pub mod dataset;
pub mod db;
pub mod error;

pub use error::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SeedConfig, load_dotenv};
    pub use crate::dataset::{
        Dataset, FacultyRecord, GlobalStateRecord, GroupRecord, RunnerRecord,
    };
    pub use crate::db::{SeedReport, Seeder, TableCounts, TableReport};
    pub use crate::error::SeedError;
}
