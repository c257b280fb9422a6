use sqlx::FromRow;

/// One year of a single country's history
#[derive(Debug, Clone, FromRow)]
pub struct YearlyRate {
    pub year: i64,
    pub u5mr: f64,
}
