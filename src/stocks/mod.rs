//! Stock symbol subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     StockConfig[] (from config, defaults to the defense table)
//!     → registry.rs (dedupe, sort by symbol)
//!     → Freeze as immutable StockRegistry
//!
//! Per request:
//!     symbol → StockRegistry::lookup → Option<&StockRecord>
//! ```
//!
//! # Design Decisions
//! - Registry is immutable once built (shared via Arc, no locks)
//! - Ordered by symbol so listings are stable across calls
//! - Lookups are exact and case-sensitive

pub mod registry;

pub use registry::{StockRecord, StockRegistry};
