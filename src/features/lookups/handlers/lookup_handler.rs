use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::{AppError, Result};
use crate::features::lookups::services::LookupService;
use crate::shared::constants::{
    COUNTRY_PLACEHOLDER, REGION_PLACEHOLDER, SUBREGION_PLACEHOLDER, YEAR_PLACEHOLDER,
};
use crate::shared::html;
use crate::shared::types::SelectOption;

/// Dropdowns only report that something went wrong, never the store's message.
fn lookup_failed(e: AppError) -> AppError {
    AppError::Internal(e.to_string())
}

/// List countries as dropdown options
#[utoipa::path(
    get,
    path = "/api/countries",
    responses(
        (status = 200, description = "Country options, placeholder first", body = String, content_type = "text/html")
    ),
    tag = "lookups"
)]
pub async fn list_countries(State(service): State<Arc<LookupService>>) -> Result<Html<String>> {
    let countries = service.list_countries().await.map_err(lookup_failed)?;
    let options: Vec<SelectOption> = countries
        .into_iter()
        .map(|c| SelectOption::new(c.id, c.name))
        .collect();
    Ok(Html(html::render_options(COUNTRY_PLACEHOLDER, &options)?))
}

/// List sub-regions as dropdown options
#[utoipa::path(
    get,
    path = "/api/subregions",
    responses(
        (status = 200, description = "Sub-region options, placeholder first", body = String, content_type = "text/html")
    ),
    tag = "lookups"
)]
pub async fn list_subregions(State(service): State<Arc<LookupService>>) -> Result<Html<String>> {
    let subregions = service.list_subregions().await.map_err(lookup_failed)?;
    let options: Vec<SelectOption> = subregions
        .into_iter()
        .map(|s| SelectOption::new(s.id, s.name))
        .collect();
    Ok(Html(html::render_options(SUBREGION_PLACEHOLDER, &options)?))
}

/// List years with data as dropdown options
#[utoipa::path(
    get,
    path = "/api/years",
    responses(
        (status = 200, description = "Year options newest first, placeholder first", body = String, content_type = "text/html")
    ),
    tag = "lookups"
)]
pub async fn list_years(State(service): State<Arc<LookupService>>) -> Result<Html<String>> {
    let years = service.list_years().await.map_err(lookup_failed)?;
    let options: Vec<SelectOption> = years
        .into_iter()
        .map(|y| SelectOption::new(y, y.to_string()))
        .collect();
    Ok(Html(html::render_options(YEAR_PLACEHOLDER, &options)?))
}

/// List regions as dropdown options
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "Region options, placeholder first", body = String, content_type = "text/html")
    ),
    tag = "lookups"
)]
pub async fn list_regions(State(service): State<Arc<LookupService>>) -> Result<Html<String>> {
    let regions = service.list_regions().await.map_err(lookup_failed)?;
    let options: Vec<SelectOption> = regions
        .into_iter()
        .map(|r| SelectOption::new(r.id, r.name))
        .collect();
    Ok(Html(html::render_options(REGION_PLACEHOLDER, &options)?))
}
