use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::reports::models::{CountryRate, SubRegionAverage, YearlyRate};
use crate::shared::constants::{SEARCH_YEAR, TOP_MORTALITY_LIMIT};

/// Service for the read-only U5MR reports
pub struct ReportService {
    pool: SqlitePool,
}

/// Turn a keyword into a LIKE pattern that matches it literally, anywhere in the name.
/// Case folding is left to LIKE itself, so the keyword keeps its original case.
fn contains_pattern(keyword: &str) -> String {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

impl ReportService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All recorded years for one country, newest first
    pub async fn country_history(&self, country_id: i64) -> Result<Vec<YearlyRate>> {
        let rows = sqlx::query_as::<_, YearlyRate>(
            r#"
            SELECT year, u5mr
            FROM U5MR_Records
            WHERE country_id = ?
            ORDER BY year DESC
            "#,
        )
        .bind(country_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch history for country {}: {:?}",
                country_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Every country of a sub-region with a record in `year`, lowest rate first
    pub async fn subregion_snapshot(
        &self,
        subregion_id: i64,
        year: i64,
    ) -> Result<Vec<CountryRate>> {
        let rows = sqlx::query_as::<_, CountryRate>(
            r#"
            SELECT c.name, r.u5mr
            FROM U5MR_Records r
            JOIN Countries c ON r.country_id = c.id
            WHERE c.subregion_id = ? AND r.year = ?
            ORDER BY r.u5mr ASC
            "#,
        )
        .bind(subregion_id)
        .bind(year)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch snapshot for sub-region {} in {}: {:?}",
                subregion_id,
                year,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Mean rate per sub-region of a region in `year`, ascending by the unrounded mean
    pub async fn region_averages(
        &self,
        region_id: i64,
        year: i64,
    ) -> Result<Vec<SubRegionAverage>> {
        let rows = sqlx::query_as::<_, SubRegionAverage>(
            r#"
            SELECT s.name, AVG(ur.u5mr) AS avg_u5mr
            FROM U5MR_Records ur
            JOIN Countries c ON ur.country_id = c.id
            JOIN SubRegions s ON c.subregion_id = s.id
            WHERE s.region_id = ? AND ur.year = ?
            GROUP BY s.name
            ORDER BY avg_u5mr ASC
            "#,
        )
        .bind(region_id)
        .bind(year)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch averages for region {} in {}: {:?}",
                region_id,
                year,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// Countries whose name contains `keyword` (case-insensitive), with their 2023 rate
    pub async fn search_countries(&self, keyword: &str) -> Result<Vec<CountryRate>> {
        let rows = sqlx::query_as::<_, CountryRate>(
            r#"
            SELECT c.name, r.u5mr
            FROM Countries c
            JOIN U5MR_Records r ON c.id = r.country_id
            WHERE r.year = ? AND c.name LIKE ? ESCAPE '\'
            ORDER BY c.name ASC
            "#,
        )
        .bind(SEARCH_YEAR)
        .bind(contains_pattern(keyword))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to search countries for {:?}: {:?}", keyword, e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    /// The highest rates recorded in `year`, at most five
    pub async fn top_mortality(&self, year: i64) -> Result<Vec<CountryRate>> {
        let rows = sqlx::query_as::<_, CountryRate>(
            r#"
            SELECT c.name, r.u5mr
            FROM U5MR_Records r
            JOIN Countries c ON r.country_id = c.id
            WHERE r.year = ?
            ORDER BY r.u5mr DESC
            LIMIT ?
            "#,
        )
        .bind(year)
        .bind(TOP_MORTALITY_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch top mortality for {}: {:?}", year, e);
            AppError::Database(e)
        })?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{insert_record, seeded_pool};

    fn names(rows: &[CountryRate]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Ind"), "%Ind%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
    }

    #[tokio::test]
    async fn test_country_history_newest_first() {
        let service = ReportService::new(seeded_pool().await);

        let rows = service.country_history(100).await.unwrap();
        let years: Vec<i64> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2022, 2021]);
        assert_eq!(rows[0].u5mr, 29.0);
    }

    #[tokio::test]
    async fn test_country_history_unknown_country_is_empty() {
        let service = ReportService::new(seeded_pool().await);

        assert!(service.country_history(999).await.unwrap().is_empty());
        assert!(service.country_history(300).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subregion_snapshot_lowest_first() {
        let service = ReportService::new(seeded_pool().await);

        let rows = service.subregion_snapshot(10, 2023).await.unwrap();
        assert_eq!(names(&rows), vec!["Bangladesh", "India", "Pakistan"]);
        assert!(rows.windows(2).all(|w| w[0].u5mr <= w[1].u5mr));
    }

    #[tokio::test]
    async fn test_subregion_snapshot_without_records() {
        let service = ReportService::new(seeded_pool().await);

        assert!(service.subregion_snapshot(30, 2023).await.unwrap().is_empty());
        assert!(service.subregion_snapshot(10, 1990).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_region_averages_are_means_sorted_ascending() {
        let service = ReportService::new(seeded_pool().await);

        let rows = service.region_averages(1, 2023).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Eastern Asia");
        assert!((rows[0].avg_u5mr - (2.2 + 14.8) / 2.0).abs() < 1e-9);
        assert_eq!(rows[1].name, "Southern Asia");
        assert!((rows[1].avg_u5mr - (29.0 + 61.2 + 27.3) / 3.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_region_averages_sort_on_unrounded_values() {
        let pool = seeded_pool().await;
        // Both sub-regions round to 1.00 but Eastern Asia is strictly lower
        insert_record(&pool, 100, 1999, 1.004).await;
        insert_record(&pool, 110, 1999, 1.001).await;
        let service = ReportService::new(pool);

        let rows = service.region_averages(1, 1999).await.unwrap();
        assert_eq!(rows[0].name, "Eastern Asia");
        assert_eq!(rows[1].name, "Southern Asia");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_2023_only() {
        let service = ReportService::new(seeded_pool().await);

        let rows = service.search_countries("NIG").await.unwrap();
        assert_eq!(names(&rows), vec!["Niger", "Nigeria"]);

        // Guinea-Bissau only has 2022 data
        let rows = service.search_countries("guinea").await.unwrap();
        assert_eq!(names(&rows), vec!["Guinea"]);
        assert_eq!(rows[0].u5mr, 98.8);
    }

    #[tokio::test]
    async fn test_search_matches_non_ascii_names() {
        let pool = seeded_pool().await;
        sqlx::query("INSERT INTO Countries (id, name, subregion_id) VALUES (400, 'Åland Islands', 30)")
            .execute(&pool)
            .await
            .unwrap();
        insert_record(&pool, 400, 2023, 3.1).await;
        let service = ReportService::new(pool);

        let rows = service.search_countries("Åland").await.unwrap();
        assert_eq!(names(&rows), vec!["Åland Islands"]);

        let rows = service.search_countries("ISLANDS").await.unwrap();
        assert_eq!(names(&rows), vec!["Åland Islands"]);
    }

    #[tokio::test]
    async fn test_search_treats_wildcards_literally() {
        let service = ReportService::new(seeded_pool().await);

        assert!(service.search_countries("%").await.unwrap().is_empty());
        assert!(service.search_countries("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_top_mortality_capped_at_five() {
        let service = ReportService::new(seeded_pool().await);

        let rows = service.top_mortality(2023).await.unwrap();
        assert_eq!(
            names(&rows),
            vec!["Niger", "Nigeria", "Guinea", "Mali", "Pakistan"]
        );

        let rows = service.top_mortality(2021).await.unwrap();
        assert_eq!(names(&rows), vec!["India"]);

        assert!(service.top_mortality(1990).await.unwrap().is_empty());
    }
}
