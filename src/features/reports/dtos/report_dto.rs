use serde::Deserialize;
use utoipa::ToSchema;

/// Form body for the country history report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CountryHistoryForm {
    pub country_id: i64,
}

/// Form body for the sub-region snapshot report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubRegionSnapshotForm {
    pub subregion_id: i64,
    pub year: i64,
}

/// Form body for the region averages report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RegionAveragesForm {
    pub region_id: i64,
    pub year: i64,
}

/// Form body for the keyword search
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct KeywordSearchForm {
    /// Case-insensitive fragment of a country name
    #[serde(default)]
    pub keyword: String,
}

/// Form body for the highest-mortality ranking
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TopMortalityForm {
    pub year: i64,
}
