use utoipa::{Modify, OpenApi};

use crate::features::lookups::handlers as lookups_handlers;
use crate::features::records::{dtos as records_dtos, handlers as records_handlers};
use crate::features::reports::{dtos as reports_dtos, handlers as reports_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Lookups
        lookups_handlers::list_countries,
        lookups_handlers::list_subregions,
        lookups_handlers::list_years,
        lookups_handlers::list_regions,
        // Reports
        reports_handlers::country_history,
        reports_handlers::subregion_snapshot,
        reports_handlers::region_averages,
        reports_handlers::search_countries,
        reports_handlers::top_mortality,
        // Records
        records_handlers::add_next_year,
        records_handlers::update_record,
        records_handlers::delete_range,
    ),
    components(
        schemas(
            reports_dtos::CountryHistoryForm,
            reports_dtos::SubRegionSnapshotForm,
            reports_dtos::RegionAveragesForm,
            reports_dtos::KeywordSearchForm,
            reports_dtos::TopMortalityForm,
            records_dtos::AddRecordForm,
            records_dtos::UpdateRecordForm,
            records_dtos::DeleteRangeForm,
        )
    ),
    tags(
        (name = "lookups", description = "Dropdown options for countries, sub-regions, regions and years"),
        (name = "reports", description = "U5MR report tables"),
        (name = "records", description = "Add, update and delete U5MR records"),
    ),
    info(
        title = "U5MR Dashboard",
        version = "0.1.0",
        description = "Under-five mortality rate reports and record maintenance",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
