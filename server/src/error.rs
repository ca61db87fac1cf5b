//! HTTP-facing errors.
//!
//! The store never fails; absence comes back as `None` or `false`. Handlers
//! translate that into `AppError::NotFound`, and boundary validation into
//! `AppError::BadRequest`. Both render as a problem-details JSON body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// RFC 7807 style error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    pub fn todo_not_found() -> Self {
        AppError::NotFound("no such todo for this owner".to_string())
    }

    pub fn missing_owner() -> Self {
        AppError::BadRequest("userRole query parameter is required".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, title, detail) = match self {
            AppError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, "about:blank#not-found", "Not Found", detail)
            }
            AppError::BadRequest(detail) => {
                tracing::debug!(%detail, "rejected request");
                (StatusCode::BAD_REQUEST, "about:blank#bad-request", "Bad Request", detail)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error_type: error_type.to_string(),
                title: title.to_string(),
                status: status.as_u16(),
                detail,
            }),
        )
            .into_response()
    }
}
