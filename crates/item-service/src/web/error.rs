//! Error-to-HTTP mapping.

use crate::item_actor::ItemError;
use crate::model::ValidationErrors;
use crate::processor::ProcessError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Every failure a handler can report.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body violates a declared constraint. Rendered as a field → message map.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    /// Unresolvable id, or a structurally invalid request.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Storage(String),
    /// The batch processor could not run at all. Rendered as an empty array.
    #[error("Processing failed: {0}")]
    ProcessFailure(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl From<ItemError> for ApiError {
    fn from(e: ItemError) -> Self {
        match e {
            ItemError::NotFound(_) => Self::BadRequest(e.to_string()),
            ItemError::Validation(errors) => Self::Validation(errors),
            ItemError::Storage(msg) => Self::Storage(msg),
        }
    }
}

impl From<ProcessError> for ApiError {
    fn from(e: ProcessError) -> Self {
        Self::ProcessFailure(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: msg })).into_response()
            }
            Self::Storage(msg) => {
                error!(error = %msg, "Storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: msg })).into_response()
            }
            Self::ProcessFailure(msg) => {
                error!(error = %msg, "Batch processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Vec::<serde_json::Value>::new()),
                )
                    .into_response()
            }
        }
    }
}
