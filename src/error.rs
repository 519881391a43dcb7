/*
 * Responsibility
 * - App-wide AppError + IntoResponse (HTTP status / JSON error body)
 * - Service-level errors (basket, claims) convert into it uniformly
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::basket::BasketError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("credential is missing")]
    CredentialMissing,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("upstream service unavailable")]
    Upstream,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            AppError::CredentialMissing => (StatusCode::UNAUTHORIZED, "CREDENTIAL_MISSING"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            AppError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Upstream => (StatusCode::INTERNAL_SERVER_ERROR, "UPSTREAM_UNAVAILABLE"),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let body = ErrorResponseBody {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<BasketError> for AppError {
    fn from(e: BasketError) -> Self {
        match e {
            BasketError::SubjectNotFound => AppError::NotFound { resource: "user" },
            BasketError::LineNotFound | BasketError::ProductNotFound => {
                AppError::NotFound { resource: "product" }
            }
            BasketError::InvalidUnits(units) => {
                AppError::InvalidRequest(format!("units must be positive, got {units}"))
            }
            BasketError::Catalog(err) => {
                tracing::error!(error = %err, "product catalog call failed");
                AppError::Upstream
            }
        }
    }
}
