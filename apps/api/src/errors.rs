use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::Envelope;

/// Generic message for failures in the user controller.
pub const SERVER_ERROR: &str = "Server error";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// Shares the 400 status with `Validation`; clients branch on the message.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Unauthenticated")]
    Unauthenticated,

    /// Signed in, but the role does not allow the operation.
    #[error("Forbidden")]
    Forbidden,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{message}: {source:#}")]
    Internal {
        message: &'static str,
        source: anyhow::Error,
    },
}

impl AppError {
    /// Builds a `map_err` adapter that turns any backend failure into a 500
    /// carrying the operation's generic message.
    pub fn internal<E>(message: &'static str) -> impl FnOnce(E) -> AppError
    where
        E: Into<anyhow::Error>,
    {
        move |source| AppError::Internal {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) | AppError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => msg,
            AppError::InvalidCredentials => "Incorrect email or password.".to_string(),
            AppError::Unauthenticated => "User not authenticated".to_string(),
            AppError::Forbidden => "Access denied".to_string(),
            AppError::Internal { message, source } => {
                tracing::error!("{message}: {source:?}");
                message.to_string()
            }
        };

        (status, Json(Envelope::failure(message))).into_response()
    }
}
