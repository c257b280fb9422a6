use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/report/1", post(handlers::country_history))
        .route("/report/2", post(handlers::subregion_snapshot))
        .route("/report/3", post(handlers::region_averages))
        .route("/search", post(handlers::search_countries))
        .route("/report/8", post(handlers::top_mortality))
        .with_state(service)
}
