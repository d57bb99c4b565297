//! Method filtering ahead of the CORS layer.
//!
//! The CORS layer answers every OPTIONS request as a preflight. Only
//! requests carrying `Access-Control-Request-Method` are real preflights;
//! any other OPTIONS is rejected here with the usual 405 JSON error.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{header, Method},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::ApiError;
use crate::http::request::request_id;
use crate::observability::metrics;

/// True for a CORS preflight: OPTIONS with `Access-Control-Request-Method`.
pub fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

pub async fn reject_bare_options(request: Request, next: Next) -> Response {
    if request.method() != Method::OPTIONS || is_preflight(&request) {
        return next.run(request).await;
    }

    let start_time = Instant::now();
    tracing::info!(
        request_id = %request_id(request.headers()),
        path = %request.uri().path(),
        "OPTIONS without preflight headers rejected"
    );

    let err = ApiError::MethodNotAllowed {
        method: Method::OPTIONS.to_string(),
    };
    metrics::record_request(
        Method::OPTIONS.as_str(),
        err.status().as_u16(),
        "none",
        start_time,
    );
    err.into_response()
}
