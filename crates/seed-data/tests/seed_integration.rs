//! Integration tests for seeding against a real Postgres database.
//!
//! These tests verify:
//! - Seeding an empty database creates every record
//! - Re-seeding is idempotent and never surfaces conflicts
//! - Existing rows are skipped, never updated
//! - A failing statement rolls back the whole pass
//!
//! To run these tests, set DATABASE_URL to a database the test user may create
//! schemas in:
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seed-data`
//!
//! Note: Each test works in its own schema, created on connect and dropped at
//! the end, so they can safely run against a development database.

use seed_data::prelude::*;
use sqlx::{Executor, PgPool, postgres::PgPoolOptions};
use std::env;
use time::macros::datetime;
use uuid::Uuid;

const SCHEMA_DDL: &str = r#"
    CREATE TABLE "Faculty" (
        "id" SERIAL PRIMARY KEY,
        "name" TEXT NOT NULL UNIQUE
    );
    CREATE TABLE "Group" (
        "id" SERIAL PRIMARY KEY,
        "groupNumber" INTEGER NOT NULL UNIQUE,
        "groupName" TEXT NOT NULL
    );
    CREATE TABLE "Runner" (
        "id" SERIAL PRIMARY KEY,
        "firstName" TEXT NOT NULL,
        "lastName" TEXT NOT NULL,
        "identification" TEXT NOT NULL UNIQUE,
        "facultyId" INTEGER,
        "registrationTime" TIMESTAMP(3) NOT NULL,
        "groupNumber" INTEGER,
        "testTime" TEXT,
        "firstYear" BOOLEAN NOT NULL
    );
    CREATE TABLE "GlobalState" (
        "id" INTEGER PRIMARY KEY,
        "raining" BOOLEAN NOT NULL DEFAULT false
    );
"#;

/// Get a pool bound to a fresh schema, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<(PgPool, String)> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let schema = format!("seed_test_{}", Uuid::new_v4().simple());
    let setup =
        format!(r#"CREATE SCHEMA IF NOT EXISTS "{schema}"; SET search_path TO "{schema}";"#);

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .after_connect(move |conn, _meta| {
            let setup = setup.clone();
            Box::pin(async move {
                conn.execute(setup.as_str()).await?;
                Ok(())
            })
        })
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    pool.execute(SCHEMA_DDL)
        .await
        .expect("Failed to create test tables");

    Some((pool, schema))
}

/// Drops the test schema and closes the pool.
async fn cleanup(pool: PgPool, schema: &str) {
    let _ = pool
        .execute(format!(r#"DROP SCHEMA IF EXISTS "{schema}" CASCADE"#).as_str())
        .await;
    pool.close().await;
}

#[tokio::test]
async fn test_seed_empty_database() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());

    let report = seeder
        .seed(&Dataset::builtin())
        .await
        .expect("Seeding failed");

    assert_eq!(report.runners.inserted, 25);
    assert_eq!(report.groups.inserted, 2);
    assert_eq!(report.faculties.inserted, 2);
    assert_eq!(report.global_state.inserted, 1);
    assert_eq!(report.total_skipped(), 0);

    let counts = seeder.table_counts().await.unwrap();
    assert_eq!(
        counts,
        TableCounts {
            runners: 25,
            groups: 2,
            faculties: 2,
            global_state: 1,
        }
    );

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_seed_twice_is_idempotent() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());
    let dataset = Dataset::builtin();

    seeder.seed(&dataset).await.expect("First seed failed");
    let once = seeder.table_counts().await.unwrap();

    let second = seeder.seed(&dataset).await.expect("Second seed failed");
    let twice = seeder.table_counts().await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(second.total_inserted(), 0);
    assert_eq!(second.total_skipped(), 30);

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_runners_stored_with_submitted_values() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());
    let dataset = Dataset::builtin();

    seeder.seed(&dataset).await.expect("Seeding failed");

    for runner in &dataset.runners {
        let stored = seeder
            .find_runner(&runner.identification)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("Runner {} missing", runner.identification));
        assert_eq!(&stored, runner);
    }

    let (matches,): (i64,) =
        sqlx::query_as(r#"SELECT COUNT(*) FROM "Runner" WHERE "identification" = $1"#)
            .bind("r0000013")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(matches, 1);

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_existing_runner_is_not_updated() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());

    let existing = RunnerRecord {
        first_name: "Johnny".to_string(),
        last_name: "Doherty".to_string(),
        identification: "r0000001".to_string(),
        faculty_id: 2,
        registration_time: datetime!(2024-10-01 09:00:00 UTC),
        group_number: 2,
        test_time: "3.05".to_string(),
        first_year: false,
    };
    let pre_seed = Dataset {
        runners: vec![existing.clone()],
        groups: Vec::new(),
        faculties: Vec::new(),
        global_state: GlobalStateRecord { raining: true },
    };
    seeder.seed(&pre_seed).await.expect("Pre-seed failed");

    let report = seeder
        .seed(&Dataset::builtin())
        .await
        .expect("Seeding failed");
    assert_eq!(report.runners.inserted, 24);
    assert_eq!(report.runners.skipped(), 1);
    assert_eq!(report.global_state.skipped(), 1);

    let stored = seeder.find_runner("r0000001").await.unwrap();
    assert_eq!(stored, Some(existing));

    let (raining,): (bool,) =
        sqlx::query_as(r#"SELECT "raining" FROM "GlobalState" WHERE "id" = 1"#)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(raining, "global state must not be reset by seeding");

    assert_eq!(seeder.table_counts().await.unwrap().runners, 25);

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_global_state_stays_singleton() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());
    let dataset = Dataset::builtin();

    for _ in 0..3 {
        seeder.seed(&dataset).await.expect("Seeding failed");
    }

    let ids: Vec<(i32,)> = sqlx::query_as(r#"SELECT "id" FROM "GlobalState""#)
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(ids, vec![(1,)]);

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_fixture_cannot_add_second_global_state() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());

    seeder
        .seed(&Dataset::builtin())
        .await
        .expect("Seeding failed");

    let fixture = Dataset::from_json_str(r#"{"globalState": {"id": 2, "raining": true}}"#)
        .expect("Fixture should parse");
    let report = seeder.seed(&fixture).await.expect("Fixture seeding failed");
    assert_eq!(report.global_state.inserted, 0);

    let rows: Vec<(i32, bool)> = sqlx::query_as(r#"SELECT "id", "raining" FROM "GlobalState""#)
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(rows, vec![(1, false)]);

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_failed_statement_rolls_back_everything() {
    let Some((pool, schema)) = get_test_pool().await else {
        return;
    };
    let seeder = Seeder::new(pool.clone());

    pool.execute(r#"DROP TABLE "GlobalState""#).await.unwrap();

    let err = seeder
        .seed(&Dataset::builtin())
        .await
        .expect_err("Seeding without GlobalState should fail");
    assert!(matches!(err, SeedError::Database(_)));

    let (runners,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Runner""#)
        .fetch_one(&pool)
        .await
        .unwrap();
    let (groups,): (i64,) = sqlx::query_as(r#"SELECT COUNT(*) FROM "Group""#)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(runners, 0);
    assert_eq!(groups, 0);

    cleanup(pool, &schema).await;
}

#[tokio::test]
async fn test_connect_and_close() {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return;
        }
    };

    let seeder = match Seeder::connect(&SeedConfig::new(database_url)).await {
        Ok(seeder) => seeder,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return;
        }
    };

    let pool = seeder.pool().clone();
    seeder.close().await;
    assert!(pool.is_closed());
}
