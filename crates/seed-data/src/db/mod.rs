//! Database integration for seeding relay data.
//!
//! The [`Seeder`] inserts a [`Dataset`](crate::dataset::Dataset) inside a single
//! transaction, skipping rows whose natural key already exists.

mod report;
mod seeder;

pub use report::{SeedReport, TableCounts, TableReport};
pub use seeder::Seeder;
