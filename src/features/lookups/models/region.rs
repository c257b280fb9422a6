use sqlx::FromRow;

/// Top-level geographic grouping
#[derive(Debug, Clone, FromRow)]
pub struct Region {
    pub id: i64,
    pub name: String,
}
