//! Row types for the four seeded tables.
//!
//! Field names serialize in camelCase so fixtures use the same spelling as the
//! table columns.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Key of the single `GlobalState` row.
pub const GLOBAL_STATE_ID: i32 = 1;

/// A runner registered for the relay.
///
/// `identification` is the natural key: seeding never touches an existing row
/// with the same identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct RunnerRecord {
    pub first_name: String,
    pub last_name: String,
    pub identification: String,
    pub faculty_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub registration_time: OffsetDateTime,
    pub group_number: i32,
    /// Decimal test time, kept as text (e.g. `"1.12"`).
    pub test_time: String,
    pub first_year: bool,
}

/// A running group, keyed by its number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub group_number: i32,
    pub group_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
}

/// The singleton application state row.
///
/// The row is always stored under [`GLOBAL_STATE_ID`]; an `id` in a fixture is
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStateRecord {
    pub raining: bool,
}
