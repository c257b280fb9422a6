use sqlx::{SqliteConnection, SqlitePool};

use crate::core::error::{AppError, Result};
use crate::features::records::models::{AddedRecord, DeletedRange};
use crate::shared::constants::FIRST_RECORD_YEAR;

/// Service for creating, changing and removing U5MR records
pub struct RecordService {
    pool: SqlitePool,
}

/// Year that follows a country's latest record, or the first tracked year.
fn next_year(max_year: Option<i64>) -> i64 {
    match max_year {
        Some(year) => year + 1,
        None => FIRST_RECORD_YEAR,
    }
}

async fn insert_record(
    conn: &mut SqliteConnection,
    country_id: i64,
    year: i64,
    u5mr: f64,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO U5MR_Records (country_id, year, u5mr)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(country_id)
    .bind(year)
    .bind(u5mr)
    .execute(conn)
    .await
    .map_err(|e| {
        tracing::error!(
            "Failed to insert record for country {} year {}: {:?}",
            country_id,
            year,
            e
        );
        AppError::from_write(e)
    })?;

    Ok(())
}

impl RecordService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a record for the year after the country's latest one.
    ///
    /// The lookup and the insert share an immediate transaction, so concurrent
    /// adds queue on the write lock instead of reading the same latest year.
    /// A row that still collides on `(country_id, year)` surfaces as `Conflict`
    /// and is not retried.
    pub async fn add_next_year(&self, country_id: i64, u5mr: f64) -> Result<AddedRecord> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let max_year = sqlx::query_scalar::<_, Option<i64>>(
            r#"
            SELECT MAX(year)
            FROM U5MR_Records
            WHERE country_id = ?
            "#,
        )
        .bind(country_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch latest year for country {}: {:?}",
                country_id,
                e
            );
            AppError::Database(e)
        })?;

        let year = next_year(max_year);
        insert_record(&mut tx, country_id, year, u5mr).await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit record for country {}: {:?}", country_id, e);
            AppError::from_write(e)
        })?;

        tracing::info!(country_id, year, u5mr, "Added U5MR record");

        Ok(AddedRecord { year, u5mr })
    }

    /// Overwrite the rate of an existing record. Returns `false` when no
    /// `(country_id, year)` row exists; nothing is created in that case.
    pub async fn update_record(&self, country_id: i64, year: i64, u5mr: f64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE U5MR_Records
            SET u5mr = ?
            WHERE country_id = ? AND year = ?
            "#,
        )
        .bind(u5mr)
        .bind(country_id)
        .bind(year)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to update record for country {} year {}: {:?}",
                country_id,
                year,
                e
            );
            AppError::from_write(e)
        })?;

        let updated = result.rows_affected() > 0;
        if updated {
            tracing::info!(country_id, year, u5mr, "Updated U5MR record");
        }

        Ok(updated)
    }

    /// Delete a country's records with `start_year <= year <= end_year`.
    ///
    /// Callers validate the range first; a reversed range simply matches nothing.
    pub async fn delete_range(
        &self,
        country_id: i64,
        start_year: i64,
        end_year: i64,
    ) -> Result<DeletedRange> {
        let result = sqlx::query(
            r#"
            DELETE FROM U5MR_Records
            WHERE country_id = ? AND year >= ? AND year <= ?
            "#,
        )
        .bind(country_id)
        .bind(start_year)
        .bind(end_year)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to delete records for country {} in {}..={}: {:?}",
                country_id,
                start_year,
                end_year,
                e
            );
            AppError::from_write(e)
        })?;

        let deleted = result.rows_affected();
        tracing::info!(country_id, start_year, end_year, deleted, "Deleted U5MR records");

        Ok(DeletedRange {
            deleted,
            start_year,
            end_year,
        })
    }
}
