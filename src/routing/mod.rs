//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path
//!     → router.rs (route table scan)
//!     → matcher.rs (exact / prefix / any-of, capture remainder)
//!     → endpoint handler (health, list, detail)
//!     → ApiResponse { status, body }
//!
//! Route Compilation (at startup):
//!     StockRegistry
//!     → Build ordered route table
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (exact and prefix matching only)
//! - Deterministic: same input always matches same route
//! - First match wins (table order is priority)
//! - Method-agnostic; the HTTP layer filters methods

pub mod matcher;
pub mod router;

pub use router::{Endpoint, Route, RouteMatch, Router};
