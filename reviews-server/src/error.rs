//! Error types for reviews-server
//!
//! Every error renders as `{"error": message}` with a JSON content type.
//! Client-facing messages for submission validation are fixed strings.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::filter::FilterError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Submission without a `Location` field (400)
    #[error("missing location")]
    MissingLocation,

    /// Submission `Location` not in the allow-list (400)
    #[error("invalid location")]
    InvalidLocation,

    /// Submission without a `ReviewBody` field (400)
    #[error("missing review body")]
    MissingReviewBody,

    /// Date filter failure (400 for a bad bound, 500 for bad stored data)
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Method other than GET/POST (405)
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Unexpected failure; the message is exposed to the client (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingLocation | ApiError::InvalidLocation | ApiError::MissingReviewBody => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Filter(FilterError::InvalidBound { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Filter(FilterError::UnparseableTimestamp { .. }) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
