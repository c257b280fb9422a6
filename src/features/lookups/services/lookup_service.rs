use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::lookups::models::{Country, Region, SubRegion};

/// Service for the read-only reference tables
pub struct LookupService {
    pool: SqlitePool,
}

impl LookupService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all countries ordered by name
    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        let countries = sqlx::query_as::<_, Country>(
            r#"
            SELECT id, name
            FROM Countries
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch countries: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(countries)
    }

    /// List all sub-regions ordered by name
    pub async fn list_subregions(&self) -> Result<Vec<SubRegion>> {
        let subregions = sqlx::query_as::<_, SubRegion>(
            r#"
            SELECT id, name
            FROM SubRegions
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch sub-regions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(subregions)
    }

    /// List all regions ordered by name
    pub async fn list_regions(&self) -> Result<Vec<Region>> {
        let regions = sqlx::query_as::<_, Region>(
            r#"
            SELECT id, name
            FROM Regions
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch regions: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(regions)
    }

    /// Years that have at least one record, newest first
    pub async fn list_years(&self) -> Result<Vec<i64>> {
        let years = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT DISTINCT year
            FROM U5MR_Records
            ORDER BY year DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch record years: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(years)
    }
}
