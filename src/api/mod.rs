//! JSON payloads served by the API.
//!
//! # Responsibilities
//! - Define response bodies (health, listing, detail)
//! - Map request errors to status codes and JSON error objects
//! - Format UTC timestamps
//!
//! # Design Decisions
//! - Bodies are typed structs serialized with serde, never hand-built strings
//! - Errors are values, not panics; every one renders as JSON

pub mod error;
pub mod responses;
pub mod timestamp;

pub use error::ApiError;
pub use responses::{ApiResponse, HealthResponse, StockDetail, StockSummary, SERVICE_NAME};
