//! HTTP-facing error type.

use crate::error::StoreError;
use crate::server::views;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Errors a route handler can end with.
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested contact or page does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// The contact store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(message) => {
                tracing::debug!(message = %message, "Responding 404");
                (StatusCode::NOT_FOUND, Html(views::not_found(&message))).into_response()
            }
            Self::Store(StoreError::NotFound(id)) => {
                tracing::debug!(id = %id, "Responding 404 for missing contact id");
                let message = format!("No contact with id {}", id);
                (StatusCode::NOT_FOUND, Html(views::not_found(&message))).into_response()
            }
            Self::Store(e) => {
                tracing::error!("Contact store failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::server_error())).into_response()
            }
        }
    }
}
