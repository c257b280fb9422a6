pub mod lookups;
pub mod pages;
pub mod records;
pub mod reports;

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::features::lookups::LookupService;
use crate::features::records::RecordService;
use crate::features::reports::ReportService;

/// Every store-backed route, each feature owning its own service over the shared pool.
pub fn routes(pool: SqlitePool) -> Router {
    let lookup_service = Arc::new(LookupService::new(pool.clone()));
    let report_service = Arc::new(ReportService::new(pool.clone()));
    let record_service = Arc::new(RecordService::new(pool));

    Router::new()
        .merge(lookups::routes::routes(lookup_service))
        .merge(reports::routes::routes(report_service))
        .merge(records::routes::routes(record_service))
}
