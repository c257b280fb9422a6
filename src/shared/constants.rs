/// Keyword search only ever looks at this year's figures
pub const SEARCH_YEAR: i64 = 2023;

/// Year assigned to the first record added for a country with no history
pub const FIRST_RECORD_YEAR: i64 = 2000;

/// Number of rows in the highest-mortality ranking
pub const TOP_MORTALITY_LIMIT: i64 = 5;

// =============================================================================
// DROPDOWN SENTINELS
// =============================================================================

pub const COUNTRY_PLACEHOLDER: &str = "-- Select a Country --";
pub const SUBREGION_PLACEHOLDER: &str = "-- Select Sub-Region --";
pub const YEAR_PLACEHOLDER: &str = "-- Select Year --";
pub const REGION_PLACEHOLDER: &str = "-- Select Region --";
