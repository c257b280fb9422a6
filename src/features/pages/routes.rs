use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::core::config::AppConfig;

/// Create routes for the dashboard page and static files
pub fn routes(config: &AppConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&config.index_path))
        .fallback_service(ServeDir::new(&config.static_dir))
}
