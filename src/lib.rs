//! Stock Predictor API Library
//!
//! Mock JSON API for a small set of defense-sector stocks: health check,
//! stock listing and per-symbol detail.

pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod stocks;

pub use api::{ApiError, ApiResponse};
pub use config::ApiConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::Router;
pub use stocks::{StockRecord, StockRegistry};
