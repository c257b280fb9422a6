use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::records::handlers;
use crate::features::records::services::RecordService;

/// Create routes for the records feature
pub fn routes(service: Arc<RecordService>) -> Router {
    Router::new()
        .route("/record/add", post(handlers::add_next_year))
        .route("/record/update", post(handlers::update_record))
        .route("/record/delete", post(handlers::delete_range))
        .with_state(service)
}
