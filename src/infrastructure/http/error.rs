//! HTTP Error Handling
//!
//! 业务错误统一以 HTTP 200 + errno 返回

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ApiResponse;
use crate::application::ApplicationError;

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const INTERNAL_ERROR: i32 = 500;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let response = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
                ApiResponse::error(errno::BAD_REQUEST, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(
                    errno = errno::INTERNAL_ERROR,
                    error = %msg,
                    "Internal server error"
                );
                ApiResponse::error(errno::INTERNAL_ERROR, msg)
            }
        };

        (StatusCode::OK, Json(response)).into_response()
    }
}

impl From<crate::domain::ChartError> for ApiError {
    fn from(e: crate::domain::ChartError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::Chart(e) => e.into(),
            ApplicationError::Render(e) => ApiError::Internal(e.to_string()),
            ApplicationError::InternalError(msg) => ApiError::Internal(msg),
        }
    }
}
