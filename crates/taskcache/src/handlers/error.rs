use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use taskcache_core::task::{service_error_to_status_code, ServiceError};

/// Handler error wrapping `anyhow::Error`.
///
/// Service errors pick their own status code, extractor rejections are 400 and
/// anything else is 500. Internal failures are logged but their details are
/// never sent to the client.
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(service_error) = self.0.downcast_ref::<ServiceError>() {
            let code = service_error_to_status_code(service_error);
            return StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        }
        if self.0.is::<JsonRejection>() || self.0.is::<PathRejection>() {
            return StatusCode::BAD_REQUEST;
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self.0, "Internal error");
            "Internal server error".to_string()
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request failed");
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
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
