use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::shared::html;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store failure whose engine message is shown as is
    #[error("Store error: {0}")]
    Store(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a failed write, promoting uniqueness violations to `Conflict`.
    pub fn from_write(e: sqlx::Error) -> Self {
        match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(db_err.message().to_string())
            }
            _ => AppError::Database(e),
        }
    }

    /// Strip the `Error: ` framing from a store failure, keeping the engine message.
    pub fn into_raw_store_message(self) -> Self {
        match self {
            AppError::Database(e) => match e.as_database_error() {
                Some(db_err) => AppError::Store(db_err.message().to_string()),
                None => AppError::Store(e.to_string()),
            },
            other => other,
        }
    }

    /// Message shown to the dashboard user.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => match e.as_database_error() {
                Some(db_err) => format!("Error: {}", db_err.message()),
                None => format!("Error: {}", e),
            },
            AppError::Conflict(msg) | AppError::Validation(msg) | AppError::BadRequest(msg) => {
                format!("Error: {}", msg)
            }
            AppError::Store(msg) => msg.clone(),
            AppError::Internal(_) => "Error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => tracing::error!("Database error: {:?}", e),
            AppError::Store(msg) => tracing::error!("Store error: {}", msg),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Conflict(msg) => tracing::warn!("Constraint violation: {}", msg),
            AppError::Validation(msg) | AppError::BadRequest(msg) => {
                tracing::debug!("Rejected request: {}", msg)
            }
        }

        // The dashboard injects whatever comes back, so failures are plain 200 fragments
        let body = html::render_message(&self.user_message()).unwrap_or_else(|e| {
            tracing::error!("Failed to render error fragment: {}", e);
            "Error".to_string()
        });

        (StatusCode::OK, Html(body)).into_response()
    }
}

impl From<html::TemplateError> for AppError {
    fn from(e: html::TemplateError) -> Self {
        AppError::Internal(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
