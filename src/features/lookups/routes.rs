use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::lookups::handlers;
use crate::features::lookups::services::LookupService;

/// Create routes for the lookups feature
pub fn routes(service: Arc<LookupService>) -> Router {
    Router::new()
        .route("/api/countries", get(handlers::list_countries))
        .route("/api/subregions", get(handlers::list_subregions))
        .route("/api/years", get(handlers::list_years))
        .route("/api/regions", get(handlers::list_regions))
        .with_state(service)
}
