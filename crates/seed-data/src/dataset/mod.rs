//! Records to seed, either built in or loaded from a JSON fixture.
//!
//! - [`RunnerRecord`]: runners keyed by identification
//! - [`GroupRecord`]: groups keyed by group number
//! - [`FacultyRecord`]: faculties keyed by name
//! - [`GlobalStateRecord`]: the singleton state row

mod builtin;
pub mod records;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SeedError;

pub use records::{
    FacultyRecord, GLOBAL_STATE_ID, GlobalStateRecord, GroupRecord, RunnerRecord,
};

/// Everything one seeding pass inserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub runners: Vec<RunnerRecord>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
    #[serde(default)]
    pub faculties: Vec<FacultyRecord>,
    #[serde(default)]
    pub global_state: GlobalStateRecord,
}

impl Dataset {
    /// The fixed relay dataset: 25 runners, 2 groups, 2 faculties and a dry
    /// global state.
    pub fn builtin() -> Self {
        Self {
            runners: builtin::runners(),
            groups: builtin::groups(),
            faculties: builtin::faculties(),
            global_state: builtin::global_state(),
        }
    }

    /// Parses a dataset from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON fixture from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&contents)?;
        debug!(
            "Loaded fixture {} ({} runners, {} groups, {} faculties)",
            path.display(),
            dataset.runners.len(),
            dataset.groups.len(),
            dataset.faculties.len()
        );
        Ok(dataset)
    }
}
