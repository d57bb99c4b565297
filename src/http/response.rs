//! Conversion of routed responses into HTTP responses.

use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::{ApiError, ApiResponse};

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiResponse::from(self).into_response()
    }
}
