//! 统一错误处理
//!
//! [`AppError`] is the single failure type for request handling. Every
//! validation step and every handler returns it; the HTTP boundary turns it
//! into a status code and an [`ErrorResponse`] body.
//!
//! # 错误码规范
//!
//! | 错误码 | 状态码 | 说明 |
//! |--------|--------|------|
//! | E0003 | 404 | 资源不存在 |
//! | E0006 | 400 | 无效请求 |
//! | E0007 | 405 | 方法不允许 |
//! | E9001 | 500 | 内部错误 |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ErrorResponse;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Invalid request: {0}")]
    /// 无效请求 (400) - missing, malformed or inconsistent input
    Invalid(String),

    #[error("Method not allowed: {0}")]
    /// 方法不允许 (405)
    MethodNotAllowed(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "E0003",
            AppError::Invalid(_) => "E0006",
            AppError::MethodNotAllowed(_) => "E0007",
            AppError::Internal(_) => "E9001",
        }
    }

    /// Message reported to the caller
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg) | AppError::Invalid(msg) | AppError::MethodNotAllowed(msg) => {
                msg.as_str()
            }
            AppError::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(msg) = &self {
            error!(target: "internal", error = %msg, "Internal error occurred");
        }

        let body = Json(ErrorResponse {
            code: self.code().to_string(),
            error: self.message().to_string(),
        });

        (self.status(), body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Invalid(format!("Malformed request body: {}", e.body_text()))
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Invalid(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::invalid("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::internal("x").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let err = AppError::internal("lock poisoned at store.rs:42");
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_repo_error_conversion() {
        let err: AppError = RepoError::NotFound("Dish does not exist: 9".into()).into();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Dish does not exist: 9"));
    }
}
