//! The built-in relay dataset.

use time::OffsetDateTime;
use time::macros::datetime;

use super::records::{FacultyRecord, GlobalStateRecord, GroupRecord, RunnerRecord};

// (first name, last name, identification, faculty id, registered at, group, test time, first year)
type RunnerRow = (
    &'static str,
    &'static str,
    &'static str,
    i32,
    OffsetDateTime,
    i32,
    &'static str,
    bool,
);

#[rustfmt::skip]
const RUNNERS: &[RunnerRow] = &[
    ("John", "Doe", "r0000001", 1, datetime!(2025-02-03 14:26:37.970 UTC), 1, "1.12", true),
    ("Jane", "Smith", "r0000002", 2, datetime!(2025-02-03 14:26:37.970 UTC), 2, "2.12", false),
    ("Alice", "Johnson", "r0000003", 1, datetime!(2025-02-03 14:26:37.970 UTC), 2, "1.3", true),
    ("Bob", "Williams", "r0000004", 2, datetime!(2025-02-03 14:30:00 UTC), 1, "1.45", false),
    ("Clara", "Brown", "r0000005", 1, datetime!(2025-02-03 14:31:00 UTC), 2, "2.05", true),
    ("David", "Miller", "r0000006", 2, datetime!(2025-02-03 14:32:00 UTC), 1, "1.20", true),
    ("Eva", "Davis", "r0000007", 1, datetime!(2025-02-03 14:33:00 UTC), 2, "1.55", false),
    ("Frank", "Garcia", "r0000008", 2, datetime!(2025-02-03 14:34:00 UTC), 1, "2.10", true),
    ("Grace", "Martinez", "r0000009", 1, datetime!(2025-02-03 14:35:00 UTC), 2, "1.40", false),
    ("Henry", "Rodriguez", "r0000010", 2, datetime!(2025-02-03 14:36:00 UTC), 1, "1.33", true),
    ("Ivy", "Wilson", "r0000011", 1, datetime!(2025-02-03 14:37:00 UTC), 2, "2.25", false),
    ("Jack", "Anderson", "r0000012", 2, datetime!(2025-02-03 14:38:00 UTC), 1, "1.18", true),
    ("Kara", "Thomas", "r0000013", 1, datetime!(2025-02-03 14:39:00 UTC), 2, "1.50", false),
    ("Leo", "Taylor", "r0000014", 2, datetime!(2025-02-03 14:40:00 UTC), 1, "2.00", true),
    ("Mia", "Hernandez", "r0000015", 1, datetime!(2025-02-03 14:41:00 UTC), 2, "1.27", false),
    ("Noah", "Moore", "r0000016", 2, datetime!(2025-02-03 14:42:00 UTC), 1, "1.36", true),
    ("Olivia", "Jackson", "r0000017", 1, datetime!(2025-02-03 14:43:00 UTC), 2, "1.42", true),
    ("Paul", "Martin", "r0000018", 2, datetime!(2025-02-03 14:44:00 UTC), 1, "1.58", false),
    ("Quinn", "Lee", "r0000019", 1, datetime!(2025-02-03 14:45:00 UTC), 2, "2.20", true),
    ("Ruby", "Perez", "r0000020", 2, datetime!(2025-02-03 14:46:00 UTC), 1, "1.10", false),
    ("Sam", "White", "r0000021", 1, datetime!(2025-02-03 14:47:00 UTC), 2, "1.49", true),
    ("Tina", "Harris", "r0000022", 2, datetime!(2025-02-03 14:48:00 UTC), 1, "1.22", false),
    ("Uma", "Clark", "r0000023", 1, datetime!(2025-02-03 14:49:00 UTC), 2, "2.07", true),
    ("Victor", "Lewis", "r0000024", 2, datetime!(2025-02-03 14:50:00 UTC), 1, "1.31", true),
    ("Wendy", "Robinson", "r0000025", 1, datetime!(2025-02-03 14:51:00 UTC), 2, "1.39", false),
];

const GROUPS: &[(i32, &str)] = &[(1, "Groep 1"), (2, "Testgroep 2")];

const FACULTIES: &[&str] = &["Faculteit Ingenieurswetenschappen", "Faculteit Wetenschappen"];

pub(crate) fn runners() -> Vec<RunnerRecord> {
    RUNNERS
        .iter()
        .map(
            |&(
                first_name,
                last_name,
                identification,
                faculty_id,
                registration_time,
                group_number,
                test_time,
                first_year,
            )| RunnerRecord {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                identification: identification.to_string(),
                faculty_id,
                registration_time,
                group_number,
                test_time: test_time.to_string(),
                first_year,
            },
        )
        .collect()
}

pub(crate) fn groups() -> Vec<GroupRecord> {
    GROUPS
        .iter()
        .map(|&(group_number, group_name)| GroupRecord {
            group_number,
            group_name: group_name.to_string(),
        })
        .collect()
}

pub(crate) fn faculties() -> Vec<FacultyRecord> {
    FACULTIES
        .iter()
        .map(|name| FacultyRecord {
            name: name.to_string(),
        })
        .collect()
}

pub(crate) fn global_state() -> GlobalStateRecord {
    GlobalStateRecord::default()
}
