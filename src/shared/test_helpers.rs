use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use uuid::Uuid;

use crate::core::database;

/// Fresh in-memory store with the schema applied and no rows.
///
/// Every in-memory connection is its own database, so the pool is pinned to a
/// single connection that is never recycled.
pub async fn setup_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    database::run_migrations(&pool).await.unwrap();
    pool
}

/// In-memory store seeded with the fixture dataset below.
///
/// | Region | Sub-region | Countries |
/// |--------|------------|-----------|
/// | Asia (1) | Southern Asia (10) | India 100, Pakistan 101, Bangladesh 102 |
/// | Asia (1) | Eastern Asia (11) | Japan 110, Mongolia 111 |
/// | Africa (2) | Western Africa (20) | Nigeria 200, Niger 201, Mali 202, Guinea 203, Guinea-Bissau 204 |
/// | Europe (3) | Northern Europe (30) | Norway 300 (no records) |
pub async fn seeded_pool() -> SqlitePool {
    let pool = setup_test_pool().await;

    let regions = [(1, "Asia"), (2, "Africa"), (3, "Europe")];
    for (id, name) in regions {
        sqlx::query("INSERT INTO Regions (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    let subregions = [
        (10, "Southern Asia", 1),
        (11, "Eastern Asia", 1),
        (20, "Western Africa", 2),
        (30, "Northern Europe", 3),
    ];
    for (id, name, region_id) in subregions {
        sqlx::query("INSERT INTO SubRegions (id, name, region_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(region_id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let countries = [
        (100, "India", 10),
        (101, "Pakistan", 10),
        (102, "Bangladesh", 10),
        (110, "Japan", 11),
        (111, "Mongolia", 11),
        (200, "Nigeria", 20),
        (201, "Niger", 20),
        (202, "Mali", 20),
        (203, "Guinea", 20),
        (204, "Guinea-Bissau", 20),
        (300, "Norway", 30),
    ];
    for (id, name, subregion_id) in countries {
        sqlx::query("INSERT INTO Countries (id, name, subregion_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(subregion_id)
            .execute(&pool)
            .await
            .unwrap();
    }

    let records: [(i64, i64, f64); 16] = [
        (100, 2021, 31.4),
        (100, 2022, 30.1),
        (100, 2023, 29.0),
        (101, 2022, 64.5),
        (101, 2023, 61.2),
        (102, 2023, 27.3),
        (110, 2022, 2.3),
        (110, 2023, 2.2),
        (111, 2023, 14.8),
        (200, 2022, 110.8),
        (200, 2023, 107.2),
        (201, 2023, 115.2),
        (202, 2023, 94.8),
        (203, 2023, 98.8),
        (204, 2022, 80.1),
        (102, 2022, 28.9),
    ];
    for (country_id, year, u5mr) in records {
        insert_record(&pool, country_id, year, u5mr).await;
    }

    pool
}

pub async fn insert_record(pool: &SqlitePool, country_id: i64, year: i64, u5mr: f64) {
    sqlx::query("INSERT INTO U5MR_Records (country_id, year, u5mr) VALUES (?, ?, ?)")
        .bind(country_id)
        .bind(year)
        .bind(u5mr)
        .execute(pool)
        .await
        .unwrap();
}

/// Years stored for a country, ascending
pub async fn record_years(pool: &SqlitePool, country_id: i64) -> Vec<i64> {
    sqlx::query_scalar("SELECT year FROM U5MR_Records WHERE country_id = ? ORDER BY year")
        .bind(country_id)
        .fetch_all(pool)
        .await
        .unwrap()
}

pub async fn record_rate(pool: &SqlitePool, country_id: i64, year: i64) -> Option<f64> {
    sqlx::query_scalar("SELECT u5mr FROM U5MR_Records WHERE country_id = ? AND year = ?")
        .bind(country_id)
        .bind(year)
        .fetch_optional(pool)
        .await
        .unwrap()
}

/// WAL database file in the temp dir, for tests that need several connections.
/// Holds Norway (300) with no records; the files are removed on drop.
pub struct FileStore {
    pub pool: SqlitePool,
    path: PathBuf,
}

impl FileStore {
    pub async fn seeded() -> Self {
        let path = std::env::temp_dir().join(format!("u5mr-{}.db", Uuid::now_v7()));
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await
            .unwrap();
        database::run_migrations(&pool).await.unwrap();

        for statement in [
            "INSERT INTO Regions (id, name) VALUES (3, 'Europe')",
            "INSERT INTO SubRegions (id, name, region_id) VALUES (30, 'Northern Europe', 3)",
            "INSERT INTO Countries (id, name, subregion_id) VALUES (300, 'Norway', 30)",
        ] {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }

        Self { pool, path }
    }
}

impl Drop for FileStore {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}
