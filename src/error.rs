//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::state::CatalogError;

/// Application-level error types
///
/// All errors that can occur in the application are represented by this enum.
/// Each variant implements automatic conversion to HTTP responses via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// The named activity does not exist in the catalog
    #[error("Activity not found")]
    ActivityNotFound,

    /// The student is already on the activity's roster
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    /// The student is not on the activity's roster
    #[error("Participant not found in this activity")]
    ParticipantNotFound,

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::ActivityNotFound => AppError::ActivityNotFound,
            CatalogError::AlreadySignedUp => AppError::AlreadySignedUp,
            CatalogError::ParticipantNotFound => AppError::ParticipantNotFound,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ActivityNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::AlreadySignedUp => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ParticipantNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
