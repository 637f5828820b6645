//! Database seeding utilities.

use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use super::report::{SeedReport, TableCounts, TableReport};
use crate::config::SeedConfig;
use crate::dataset::{
    Dataset, FacultyRecord, GLOBAL_STATE_ID, GlobalStateRecord, GroupRecord, RunnerRecord,
};
use crate::error::SeedError;

/// Seeds relay data into the database.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a single-connection pool for the configured database.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(&config.database_url)
            .await?;

        info!("Connected to database");
        Ok(Self::new(pool))
    }

    /// Inserts every record of `dataset` that is not present yet.
    ///
    /// All statements share one transaction that is committed once at the end.
    /// If any statement fails the transaction is dropped, which rolls back
    /// everything inserted by this call.
    pub async fn seed(&self, dataset: &Dataset) -> Result<SeedReport, SeedError> {
        let mut tx = self.pool.begin().await?;

        let report = SeedReport {
            runners: Self::seed_runners(&mut tx, &dataset.runners).await?,
            groups: Self::seed_groups(&mut tx, &dataset.groups).await?,
            faculties: Self::seed_faculties(&mut tx, &dataset.faculties).await?,
            global_state: Self::seed_global_state(&mut tx, &dataset.global_state).await?,
        };

        tx.commit().await?;
        debug!("Seed transaction committed");

        Ok(report)
    }

    async fn seed_runners(
        tx: &mut Transaction<'_, Postgres>,
        runners: &[RunnerRecord],
    ) -> Result<TableReport, SeedError> {
        info!("Seeding {} runners...", runners.len());
        let mut report = TableReport::default();

        for runner in runners {
            let result = sqlx::query(
                r#"
                INSERT INTO "Runner" (
                    "firstName", "lastName", "identification", "facultyId",
                    "registrationTime", "groupNumber", "testTime", "firstYear"
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                ON CONFLICT ("identification") DO NOTHING
                "#,
            )
            .bind(&runner.first_name)
            .bind(&runner.last_name)
            .bind(&runner.identification)
            .bind(runner.faculty_id)
            .bind(runner.registration_time)
            .bind(runner.group_number)
            .bind(&runner.test_time)
            .bind(runner.first_year)
            .execute(&mut **tx)
            .await?;

            if result.rows_affected() == 0 {
                debug!("Runner {} already exists, skipped", runner.identification);
            }
            report.record(result.rows_affected());
        }

        info!("Seeded {} runners ({} skipped)", report.inserted, report.skipped());
        Ok(report)
    }

    async fn seed_groups(
        tx: &mut Transaction<'_, Postgres>,
        groups: &[GroupRecord],
    ) -> Result<TableReport, SeedError> {
        info!("Seeding {} groups...", groups.len());
        let mut report = TableReport::default();

        for group in groups {
            let result = sqlx::query(
                r#"
                INSERT INTO "Group" ("groupNumber", "groupName")
                VALUES ($1, $2)
                ON CONFLICT ("groupNumber") DO NOTHING
                "#,
            )
            .bind(group.group_number)
            .bind(&group.group_name)
            .execute(&mut **tx)
            .await?;

            report.record(result.rows_affected());
        }

        info!("Seeded {} groups ({} skipped)", report.inserted, report.skipped());
        Ok(report)
    }

    async fn seed_faculties(
        tx: &mut Transaction<'_, Postgres>,
        faculties: &[FacultyRecord],
    ) -> Result<TableReport, SeedError> {
        info!("Seeding {} faculties...", faculties.len());
        let mut report = TableReport::default();

        for faculty in faculties {
            let result = sqlx::query(
                r#"
                INSERT INTO "Faculty" ("name")
                VALUES ($1)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(&faculty.name)
            .execute(&mut **tx)
            .await?;

            report.record(result.rows_affected());
        }

        info!("Seeded {} faculties ({} skipped)", report.inserted, report.skipped());
        Ok(report)
    }

    async fn seed_global_state(
        tx: &mut Transaction<'_, Postgres>,
        state: &GlobalStateRecord,
    ) -> Result<TableReport, SeedError> {
        let result = sqlx::query(
            r#"
            INSERT INTO "GlobalState" ("id", "raining")
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(GLOBAL_STATE_ID)
        .bind(state.raining)
        .execute(&mut **tx)
        .await?;

        let mut report = TableReport::default();
        report.record(result.rows_affected());

        if report.inserted == 0 {
            info!("Global state already present");
        } else {
            info!("Seeded global state (raining: {})", state.raining);
        }
        Ok(report)
    }

    /// Counts the rows currently stored in each seeded table.
    pub async fn table_counts(&self) -> Result<TableCounts, SeedError> {
        let (runners, groups, faculties, global_state): (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM "Runner"),
                (SELECT COUNT(*) FROM "Group"),
                (SELECT COUNT(*) FROM "Faculty"),
                (SELECT COUNT(*) FROM "GlobalState")
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(TableCounts {
            runners,
            groups,
            faculties,
            global_state,
        })
    }

    /// Looks up a stored runner by identification.
    pub async fn find_runner(
        &self,
        identification: &str,
    ) -> Result<Option<RunnerRecord>, SeedError> {
        let runner = sqlx::query_as::<_, RunnerRecord>(
            r#"
            SELECT "firstName", "lastName", "identification", "facultyId",
                   "registrationTime"::timestamptz AS "registrationTime",
                   "groupNumber", "testTime"::text AS "testTime", "firstYear"
            FROM "Runner"
            WHERE "identification" = $1
            "#,
        )
        .bind(identification)
        .fetch_optional(&self.pool)
        .await?;

        Ok(runner)
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Closes the pool, waiting for the connection to be released.
    pub async fn close(self) {
        self.pool.close().await;
        debug!("Database connection closed");
    }
}
