use std::sync::Arc;

use axum::{extract::State, response::Html};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::records::dtos::{AddRecordForm, DeleteRangeForm, UpdateRecordForm};
use crate::features::records::services::RecordService;
use crate::shared::html;
use crate::shared::types::format_rate;
use crate::shared::validation::first_message;

/// Add the next year's record for a country (feature 5)
#[utoipa::path(
    post,
    path = "/record/add",
    request_body(content = AddRecordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Success sentence with the resolved year, or the store's rejection", body = String, content_type = "text/html")
    ),
    tag = "records"
)]
pub async fn add_next_year(
    State(service): State<Arc<RecordService>>,
    AppForm(form): AppForm<AddRecordForm>,
) -> Result<Html<String>> {
    let added = service.add_next_year(form.country_id, form.u5mr).await?;
    Ok(Html(html::render_record_added(
        added.year,
        &format_rate(added.u5mr),
    )?))
}

/// Update the rate of an existing record (feature 6)
#[utoipa::path(
    post,
    path = "/record/update",
    request_body(content = UpdateRecordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Success sentence, or a notice that no record matched", body = String, content_type = "text/html")
    ),
    tag = "records"
)]
pub async fn update_record(
    State(service): State<Arc<RecordService>>,
    AppForm(form): AppForm<UpdateRecordForm>,
) -> Result<Html<String>> {
    let updated = service
        .update_record(form.country_id, form.year, form.u5mr)
        .await?;
    if !updated {
        return Ok(Html(html::render_message(
            "No record found for this country and year. Cannot update.",
        )?));
    }

    Ok(Html(html::render_record_updated(
        form.year,
        &format_rate(form.u5mr),
    )?))
}

/// Delete a country's records within a year range (feature 7)
#[utoipa::path(
    post,
    path = "/record/delete",
    request_body(content = DeleteRangeForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Deleted count, a nothing-to-delete notice, or a range validation error", body = String, content_type = "text/html")
    ),
    tag = "records"
)]
pub async fn delete_range(
    State(service): State<Arc<RecordService>>,
    AppForm(form): AppForm<DeleteRangeForm>,
) -> Result<Html<String>> {
    form.validate()
        .map_err(|e| AppError::Validation(first_message(&e)))?;

    let result = service
        .delete_range(form.country_id, form.start_year, form.end_year)
        .await?;
    if result.deleted == 0 {
        return Ok(Html(html::render_message(
            "No records found to delete in this range.",
        )?));
    }

    Ok(Html(html::render_records_deleted(
        result.deleted,
        result.start_year,
        result.end_year,
    )?))
}
