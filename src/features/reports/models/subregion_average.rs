use sqlx::FromRow;

/// Mean rate across a sub-region's countries, unrounded
#[derive(Debug, Clone, FromRow)]
pub struct SubRegionAverage {
    pub name: String,
    pub avg_u5mr: f64,
}
