use sqlx::FromRow;

/// A country's rate for the year being reported
#[derive(Debug, Clone, FromRow)]
pub struct CountryRate {
    pub name: String,
    pub u5mr: f64,
}
