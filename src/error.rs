//! Application error type and its HTTP representation.
//!
//! Every failure on the write path is reported to clients as
//! `{ "message": "..." }` with the status carried by the error. The read path
//! never surfaces these errors; it renders the not-found page instead.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::entities::SlugError;
use crate::utils::db_error::is_unique_violation_on_slug;
use crate::utils::url_validator::UrlValidationError;

/// Message reported when a slug is already taken.
pub const SLUG_IN_USE: &str = "Slug in use.";

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed slug or URL.
    #[error("{0}")]
    Validation(String),

    /// The slug is already taken.
    #[error("{0}")]
    Conflict(String),

    /// The request body could not be read as JSON.
    #[error("{message}")]
    Payload { status: StatusCode, message: String },

    /// Lookup or insert failure in the link store. The detail is logged,
    /// never sent to clients.
    #[error("Store error")]
    Store(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store(detail.into())
    }

    /// HTTP status for this error. Anything without a status of its own is a 500.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Payload { status, .. } => *status,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AppError::Store(detail) = &self {
            tracing::error!(error = %detail, "Link store failure");
        }

        let body = ErrorBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_slug(&e) {
            return AppError::conflict(SLUG_IN_USE);
        }

        AppError::store(e.to_string())
    }
}

impl From<SlugError> for AppError {
    fn from(e: SlugError) -> Self {
        AppError::validation(e.to_string())
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        AppError::validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Payload {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
