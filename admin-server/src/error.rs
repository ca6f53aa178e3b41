use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared_types::{ApiErrorBody, SettingValueError, ThemeError};
use thiserror::Error;
use tracing::error;

use crate::auth::telegram::TelegramAuthError;

/// Every handler failure, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Admin access required")]
    Forbidden,
    #[error("Setting '{0}' not found")]
    SettingNotFound(String),
    #[error("Setting '{0}' is read-only")]
    ReadOnly(String),
    #[error("Invalid value for '{key}': {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: SettingValueError,
    },
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Telegram(#[from] TelegramAuthError),
    #[error("database error")]
    Database(#[from] sqlx::Error),
    #[error("session error")]
    Session(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden | ApiError::ReadOnly(_) => StatusCode::FORBIDDEN,
            ApiError::SettingNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidValue { .. } | ApiError::Theme(_) => StatusCode::BAD_REQUEST,
            ApiError::Telegram(e) => e.status(),
            ApiError::Database(_) | ApiError::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Database(e) => error!("database error: {e}"),
            ApiError::Session(e) => error!("session error: {e}"),
            _ => {}
        }
        let body = ApiErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
