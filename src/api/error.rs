//! API-level errors, reported to clients as JSON payloads.

use axum::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors a request can resolve to. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The path matched the stock detail prefix with nothing after it.
    #[error("Missing symbol")]
    MissingSymbol,

    #[error("Stock not found")]
    StockNotFound { symbol: String },

    #[error("Not found")]
    RouteNotFound { path: String },

    #[error("Method not allowed")]
    MethodNotAllowed { method: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingSymbol => StatusCode::BAD_REQUEST,
            ApiError::StockNotFound { .. } | ApiError::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// JSON payload: the message under `error` plus the offending input.
    pub fn to_body(&self) -> Value {
        let error = self.to_string();
        match self {
            ApiError::MissingSymbol => json!({ "error": error }),
            ApiError::StockNotFound { symbol } => json!({ "error": error, "symbol": symbol }),
            ApiError::RouteNotFound { path } => json!({ "error": error, "path": path }),
            ApiError::MethodNotAllowed { method } => json!({ "error": error, "method": method }),
        }
    }
}
