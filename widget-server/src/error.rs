use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};
use widget_application::AppError;
use widget_domain::error::DomainError;

/// 接口层错误：应用层错误加上请求头解析失败
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("invalid If-Match header: {0}")]
    InvalidIfMatch(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidIfMatch(_) => StatusCode::BAD_REQUEST,
            ApiError::App(err) => match err {
                AppError::NotFound(_) | AppError::Domain(DomainError::NotFound { .. }) => {
                    StatusCode::NOT_FOUND
                }
                AppError::PreconditionFailed { .. }
                | AppError::Domain(DomainError::VersionConflict { .. }) => {
                    StatusCode::PRECONDITION_FAILED
                }
                AppError::PreconditionRequired { .. } => StatusCode::PRECONDITION_REQUIRED,
                AppError::Validation(_) | AppError::Domain(DomainError::InvalidValue { .. }) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 资源不存在时返回空响应体
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        let message = if status.is_server_error() {
            error!(error = %self, "request failed");
            "internal error".to_string()
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
