//! Error handling

use axum::{
    extract::rejection::{JsonRejection, QueryRejection, StringRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::engine::{EngineError, ValidationError};
use crate::ingest::IngestError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Validation errors
    ShapeError(String),
    NotNumeric(String),

    // Malformed body, unreadable upload
    BadRequest(String),

    // Generic errors
    InternalError(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ShapeError(_) => "shape_error",
            AppError::NotNumeric(_) => "not_numeric",
            AppError::BadRequest(_) => "bad_request",
            AppError::InternalError(_) => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, error_message) = match &self {
            AppError::ShapeError(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::NotNumeric(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": code,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Shape { .. } => AppError::ShapeError(err.to_string()),
            ValidationError::NotNumeric { .. } => AppError::NotNumeric(err.to_string()),
        }
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Validation(v) => v.into(),
            EngineError::Internal(msg) => AppError::InternalError(msg),
        }
    }
}

impl From<IngestError> for AppError {
    fn from(err: IngestError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<StringRejection> for AppError {
    fn from(rejection: StringRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
