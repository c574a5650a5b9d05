//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use userdir_core::{ErrorResponse, UserdirError};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub UserdirError);

impl From<UserdirError> for AppError {
    fn from(err: UserdirError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // The inbound contract for absent entities is a bare 404.
        if matches!(self.0, UserdirError::NotFound { .. }) {
            return status.into_response();
        }

        let body = Json(ErrorResponse::from_error(&self.0));
        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;
