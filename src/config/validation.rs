//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check the stock table (unique, routable symbols)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ApiConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ApiConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("stocks[{index}]: symbol is empty")]
    EmptySymbol { index: usize },

    #[error("stocks[{index}]: symbol '{symbol}' contains '/' or whitespace")]
    UnroutableSymbol { index: usize, symbol: String },

    #[error("stocks[{index}]: duplicate symbol '{symbol}'")]
    DuplicateSymbol { index: usize, symbol: String },

    #[error("stocks[{index}]: name is empty")]
    EmptyName { index: usize },
}

/// Check a parsed config, collecting every problem found.
pub fn validate_config(config: &ApiConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let mut seen = HashSet::new();
    for (index, stock) in config.stocks.iter().enumerate() {
        if stock.symbol.is_empty() {
            errors.push(ValidationError::EmptySymbol { index });
        } else if stock.symbol.contains('/') || stock.symbol.chars().any(char::is_whitespace) {
            // The router treats everything after the stocks prefix as the symbol
            errors.push(ValidationError::UnroutableSymbol {
                index,
                symbol: stock.symbol.clone(),
            });
        } else if !seen.insert(stock.symbol.as_str()) {
            errors.push(ValidationError::DuplicateSymbol {
                index,
                symbol: stock.symbol.clone(),
            });
        }

        if stock.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
