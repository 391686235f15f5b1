//! API error handling.
//!
//! Converts errors from lower layers into `{"error": "..."}` responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::ValueObjectError, infrastructure::dto::http::ErrorResponseDto,
    usecase::ProjectError,
};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be read (malformed JSON, bad path encoding)
    #[error("{0}")]
    BadRequest(String),

    /// Path or body failed validation
    #[error(transparent)]
    Validation(#[from] ValueObjectError),

    /// Use case failure
    #[error(transparent)]
    Project(#[from] ProjectError),

    /// No route matched
    #[error("Route '{method} {path}' not found")]
    RouteNotFound { method: String, path: String },

    /// Route matched but has no handler for the method
    #[error("Method '{method}' is not allowed on '{path}'")]
    MethodNotAllowed { method: String, path: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(err) if err.is_id_error() => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Project(ProjectError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Project(ProjectError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        tracing::warn!("Request failed ({}): {}", status, message);

        (status, Json(ErrorResponseDto::new(message))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
