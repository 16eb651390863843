// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::RepositoryError;
use crate::domain::services::ServiceError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 根据错误类型确定 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        let repository_status = |err: &RepositoryError| match err {
            RepositoryError::NotFound => StatusCode::NOT_FOUND,
            RepositoryError::ConstraintViolation(_) => StatusCode::CONFLICT,
            RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            return match err {
                ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
                ServiceError::InvalidReference(_) => StatusCode::BAD_REQUEST,
                ServiceError::Repository(inner) => repository_status(inner),
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(err) => repository_status(err),
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(error = %error_message, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %error_message, "Request rejected");
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
