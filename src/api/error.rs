use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{Error, types::ErrorResponse};

impl Error {
    /// Status code reported to callers. Upstream failures are a bad gateway,
    /// anything else is on this process.
    pub fn status_code(&self) -> StatusCode {
        if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
