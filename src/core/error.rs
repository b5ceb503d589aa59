//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Generic message for failures whose details stay in the log.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// One `{field, message}` pair in an error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 处理器与中间件返回的错误
#[derive(Debug)]
pub enum ApiError {
    /// 400，附带违规字段列表
    Validation(Vec<FieldError>),
    /// 401，缺少 API Key
    Unauthorized,
    /// 403，API Key 错误
    Forbidden,
    NotFound(String),
    Internal(String),
}

#[derive(Serialize)]
struct GateRejection {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(GateRejection {
                    error: "API Key required",
                }),
            )
                .into_response(),
            ApiError::Forbidden => (
                StatusCode::FORBIDDEN,
                Json(GateRejection {
                    error: "Invalid API Key",
                }),
            )
                .into_response(),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(FieldError::new("id", message)),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FieldError::new("error", message)),
            )
                .into_response(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(field_errors(&errors))
    }
}

/// Flatten validator output into `{field, message}` pairs, ordered by field.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(field, message)
            })
        })
        .collect()
}
