use sqlx::FromRow;

/// Geographic grouping inside exactly one region
#[derive(Debug, Clone, FromRow)]
pub struct SubRegion {
    pub id: i64,
    pub name: String,
}
