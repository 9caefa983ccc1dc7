//! Error responses for the link repository API.
//!
//! Validation failures are 400s with a short message. Anything the row store
//! reports is a 500 with a generic message and the store error in `details`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types::ErrorResponse;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Invalid row index")]
    InvalidRowIndex,
    #[error("Sheet not found")]
    SheetNotFound,
    #[error("{action}")]
    Store {
        action: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Map a store failure, keeping the two cases callers can act on.
    pub fn store(action: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| match source {
            StoreError::SheetNotFound => Self::SheetNotFound,
            StoreError::RowOutOfRange { .. } => Self::InvalidRowIndex,
            source => Self::Store { action, source },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidRowIndex => StatusCode::BAD_REQUEST,
            ApiError::SheetNotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            ApiError::Store { action, source } => {
                tracing::error!(error = %source, "{action}");
                Some(source.to_string())
            }
            other => {
                tracing::debug!(status = status.as_u16(), error = %other, "rejected request");
                None
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
