//! Errors surfaced at the HTTP boundary
//!
//! Cart and catalog operations are total; only requests naming an unknown
//! item, asking for zero of something, or carrying a bad body can fail.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UnknownItem(_) => StatusCode::NOT_FOUND,
            AppError::InvalidQuantity | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        };

        tracing::warn!(%status, "request rejected: {}", self);

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
