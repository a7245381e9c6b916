use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::regions::error::RegionError;
use crate::shared::constants::{MSG_INVALID_CODE, MSG_INVALID_NAME};
use crate::shared::types::MessageResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Region(#[from] RegionError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[allow(dead_code)]
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: &str) -> Self {
        AppError::NotFound(message.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Region(RegionError::InvalidCode(ref code)) => {
                tracing::debug!("Rejected region code {:?}", code);
                (StatusCode::BAD_REQUEST, MSG_INVALID_CODE.to_string())
            }
            AppError::Region(RegionError::InvalidName(ref name)) => {
                tracing::debug!("Rejected region name {:?}", name);
                (StatusCode::BAD_REQUEST, MSG_INVALID_NAME.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
