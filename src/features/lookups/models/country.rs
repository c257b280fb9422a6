use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Country {
    pub id: i64,
    pub name: String,
}
