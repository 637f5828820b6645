//! Outcome of a seeding pass.

use std::fmt;

/// Per-table insert statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableReport {
    /// Statements issued.
    pub attempted: u64,
    /// Rows actually created.
    pub inserted: u64,
}

impl TableReport {
    /// Accounts for one insert statement that affected `rows_affected` rows.
    pub fn record(&mut self, rows_affected: u64) {
        self.attempted += 1;
        self.inserted += rows_affected;
    }

    /// Records that already existed.
    pub fn skipped(&self) -> u64 {
        self.attempted.saturating_sub(self.inserted)
    }
}

/// Statistics for a whole seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub runners: TableReport,
    pub groups: TableReport,
    pub faculties: TableReport,
    pub global_state: TableReport,
}

impl SeedReport {
    pub fn total_inserted(&self) -> u64 {
        self.tables().iter().map(|(_, t)| t.inserted).sum()
    }

    pub fn total_skipped(&self) -> u64 {
        self.tables().iter().map(|(_, t)| t.skipped()).sum()
    }

    pub fn tables(&self) -> [(&'static str, TableReport); 4] {
        [
            ("Runner", self.runners),
            ("Group", self.groups),
            ("Faculty", self.faculties),
            ("GlobalState", self.global_state),
        ]
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .tables()
            .iter()
            .map(|(name, t)| format!("{name}: {}/{} inserted", t.inserted, t.attempted))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Row counts of the seeded tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableCounts {
    pub runners: i64,
    pub groups: i64,
    pub faculties: i64,
    pub global_state: i64,
}
