use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::reports::dtos::{
    CountryHistoryForm, KeywordSearchForm, RegionAveragesForm, SubRegionSnapshotForm,
    TopMortalityForm,
};
use crate::features::reports::models::CountryRate;
use crate::features::reports::services::ReportService;
use crate::shared::html;
use crate::shared::types::{format_average, format_rate, HtmlTable};

fn report_failed(e: AppError) -> AppError {
    e.into_raw_store_message()
}

fn country_rate_table(headers: Vec<&'static str>, rows: Vec<CountryRate>) -> HtmlTable {
    let mut table = HtmlTable::new(headers);
    for row in rows {
        table.push_row(vec![row.name, format_rate(row.u5mr)]);
    }
    table
}

/// Country history (feature 1)
#[utoipa::path(
    post,
    path = "/report/1",
    request_body(content = CountryHistoryForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Year/U5MR table, newest first, or \"No data found.\"", body = String, content_type = "text/html")
    ),
    tag = "reports"
)]
pub async fn country_history(
    State(service): State<Arc<ReportService>>,
    AppForm(form): AppForm<CountryHistoryForm>,
) -> Result<Html<String>> {
    let rows = service.country_history(form.country_id).await.map_err(report_failed)?;
    if rows.is_empty() {
        return Ok(Html(html::render_message("No data found.")?));
    }

    let mut table = HtmlTable::new(vec!["Year", "U5MR"]);
    for row in rows {
        table.push_row(vec![row.year.to_string(), format_rate(row.u5mr)]);
    }
    Ok(Html(html::render_table(&table)?))
}

/// Sub-region snapshot for one year (feature 2)
#[utoipa::path(
    post,
    path = "/report/2",
    request_body(content = SubRegionSnapshotForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Country/U5MR table, lowest rate first", body = String, content_type = "text/html")
    ),
    tag = "reports"
)]
pub async fn subregion_snapshot(
    State(service): State<Arc<ReportService>>,
    AppForm(form): AppForm<SubRegionSnapshotForm>,
) -> Result<Html<String>> {
    let rows = service
        .subregion_snapshot(form.subregion_id, form.year)
        .await
        .map_err(report_failed)?;
    if rows.is_empty() {
        return Ok(Html(html::render_message(
            "No data found for this region/year.",
        )?));
    }

    let table = country_rate_table(vec!["Country", "U5MR"], rows);
    Ok(Html(html::render_table(&table)?))
}

/// Sub-region averages within a region for one year (feature 3)
#[utoipa::path(
    post,
    path = "/report/3",
    request_body(content = RegionAveragesForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Sub-region/average table, two decimals, lowest first", body = String, content_type = "text/html")
    ),
    tag = "reports"
)]
pub async fn region_averages(
    State(service): State<Arc<ReportService>>,
    AppForm(form): AppForm<RegionAveragesForm>,
) -> Result<Html<String>> {
    let rows = service
        .region_averages(form.region_id, form.year)
        .await
        .map_err(report_failed)?;
    if rows.is_empty() {
        return Ok(Html(html::render_message("No data found.")?));
    }

    let mut table = HtmlTable::new(vec!["Sub-Region", "Average U5MR"]);
    for row in rows {
        table.push_row(vec![row.name, format_average(row.avg_u5mr)]);
    }
    Ok(Html(html::render_table(&table)?))
}

/// Keyword search over 2023 figures (feature 4)
#[utoipa::path(
    post,
    path = "/search",
    request_body(content = KeywordSearchForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Country/U5MR (2023) table ordered by name", body = String, content_type = "text/html")
    ),
    tag = "reports"
)]
pub async fn search_countries(
    State(service): State<Arc<ReportService>>,
    AppForm(form): AppForm<KeywordSearchForm>,
) -> Result<Html<String>> {
    let rows = service
        .search_countries(&form.keyword)
        .await
        .map_err(report_failed)?;
    if rows.is_empty() {
        return Ok(Html(html::render_paragraph("No matches found for 2023.")?));
    }

    let table = country_rate_table(vec!["Country", "U5MR (2023)"], rows);
    Ok(Html(html::render_table(&table)?))
}

/// Five highest rates in a year, ranked (feature 8)
#[utoipa::path(
    post,
    path = "/report/8",
    request_body(content = TopMortalityForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Rank/Country/U5MR table, at most five rows", body = String, content_type = "text/html")
    ),
    tag = "reports"
)]
pub async fn top_mortality(
    State(service): State<Arc<ReportService>>,
    AppForm(form): AppForm<TopMortalityForm>,
) -> Result<Html<String>> {
    let rows = service.top_mortality(form.year).await.map_err(report_failed)?;
    if rows.is_empty() {
        return Ok(Html(html::render_message("No data found for this year.")?));
    }

    let mut table = HtmlTable::new(vec!["Rank", "Country", "U5MR"]);
    for (index, row) in rows.into_iter().enumerate() {
        table.push_row(vec![
            (index + 1).to_string(),
            row.name,
            format_rate(row.u5mr),
        ]);
    }
    Ok(Html(html::render_table(&table)?))
}
