//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Look up the first route matching a path
//! - Dispatch to the endpoint handler and build the response
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over the route table (three routes)
//! - Explicit RouteNotFound rather than a silent default

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::responses::{ApiResponse, HealthResponse, StockDetail, StockSummary};
use crate::api::timestamp::format_timestamp;
use crate::api::ApiError;
use crate::routing::matcher::{AnyMatcher, ExactMatcher, Matcher, PathPrefixMatcher};
use crate::stocks::StockRegistry;

pub const HEALTH_PATH: &str = "/health";
pub const V1_HEALTH_PATH: &str = "/api/v1/health";
pub const STOCKS_PATH: &str = "/api/v1/stocks";
pub const STOCK_DETAIL_PREFIX: &str = "/api/v1/stocks/";

/// Handler a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    ListStocks,
    StockDetail,
}

impl Endpoint {
    /// Stable label for logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::ListStocks => "list_stocks",
            Endpoint::StockDetail => "stock_detail",
        }
    }
}

/// A compiled route.
#[derive(Debug)]
pub struct Route {
    pub endpoint: Endpoint,
    matcher: Box<dyn Matcher>,
}

impl Route {
    pub fn new(endpoint: Endpoint, matcher: Box<dyn Matcher>) -> Self {
        Self { endpoint, matcher }
    }

    pub fn pattern(&self) -> String {
        self.matcher.pattern()
    }
}

/// A matched route together with the captured path remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch<'p> {
    pub endpoint: Endpoint,
    pub capture: &'p str,
}

/// Maps request paths to JSON responses.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    registry: Arc<StockRegistry>,
}

impl Router {
    /// Build the standard route table over the given registry.
    /// Routes are checked in order; first match wins.
    pub fn new(registry: Arc<StockRegistry>) -> Self {
        let routes = vec![
            Route::new(
                Endpoint::Health,
                Box::new(AnyMatcher::new(vec![
                    Box::new(ExactMatcher::new(HEALTH_PATH)),
                    Box::new(ExactMatcher::new(V1_HEALTH_PATH)),
                ])),
            ),
            Route::new(Endpoint::ListStocks, Box::new(ExactMatcher::new(STOCKS_PATH))),
            Route::new(
                Endpoint::StockDetail,
                Box::new(PathPrefixMatcher::new(STOCK_DETAIL_PREFIX)),
            ),
        ];

        Self { routes, registry }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Find the first route matching `path`.
    pub fn match_path<'p>(&self, path: &'p str) -> Option<RouteMatch<'p>> {
        self.routes.iter().find_map(|route| {
            route.matcher.capture(path).map(|capture| RouteMatch {
                endpoint: route.endpoint,
                capture,
            })
        })
    }

    /// Route a path using the current time for timestamps.
    pub fn route(&self, path: &str) -> ApiResponse {
        self.route_at(path, Utc::now())
    }

    /// Route a path, stamping time fields with `now`.
    pub fn route_at(&self, path: &str, now: DateTime<Utc>) -> ApiResponse {
        match self.dispatch(path, now) {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(path = %path, error = %err, "Request resolved to error");
                err.into()
            }
        }
    }

    /// Route a path and render the body as compact JSON.
    pub fn route_json(&self, path: &str) -> String {
        self.route(path).to_json_string()
    }

    fn dispatch(&self, path: &str, now: DateTime<Utc>) -> Result<ApiResponse, ApiError> {
        let matched = self.match_path(path).ok_or_else(|| ApiError::RouteNotFound {
            path: path.to_string(),
        })?;

        match matched.endpoint {
            Endpoint::Health => Ok(ApiResponse::ok(&HealthResponse::new(format_timestamp(now)))),
            Endpoint::ListStocks => {
                let stocks: Vec<StockSummary<'_>> =
                    self.registry.list_all().map(StockSummary::from).collect();
                Ok(ApiResponse::ok(&stocks))
            }
            Endpoint::StockDetail => {
                let symbol = matched.capture;
                if symbol.is_empty() {
                    return Err(ApiError::MissingSymbol);
                }
                let record = self
                    .registry
                    .lookup(symbol)
                    .ok_or_else(|| ApiError::StockNotFound {
                        symbol: symbol.to_string(),
                    })?;
                Ok(ApiResponse::ok(&StockDetail::mock(record, format_timestamp(now))))
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Arc::new(StockRegistry::defense_sector()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 30, 14, 3, 9).unwrap()
    }

    #[test]
    fn test_detail_for_every_known_symbol() {
        let router = Router::default();
        let expected = [
            ("LMT", "Lockheed Martin"),
            ("RTX", "Raytheon Technologies"),
            ("BA", "Boeing"),
            ("NOC", "Northrop Grumman"),
            ("LHX", "L3Harris Technologies"),
        ];

        for (symbol, name) in expected {
            let response = router.route(&format!("/api/v1/stocks/{symbol}"));
            assert_eq!(response.status, StatusCode::OK, "symbol {symbol}");
            assert_eq!(response.body["symbol"], symbol);
            assert_eq!(response.body["name"], name);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        let response = Router::default().route("/api/v1/stocks/XYZ");
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.body,
            json!({ "error": "Stock not found", "symbol": "XYZ" })
        );
    }

    #[test]
    fn test_exact_prefix_is_missing_symbol() {
        let response = Router::default().route("/api/v1/stocks/");
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({ "error": "Missing symbol" }));
    }

    #[test]
    fn test_health_routes() {
        let router = Router::default();
        for path in ["/health", "/api/v1/health"] {
            let response = router.route_at(path, fixed_now());
            assert_eq!(response.status, StatusCode::OK);
            assert_eq!(
                response.body,
                json!({
                    "status": "OK",
                    "timestamp": "2025-09-30T14:03:09Z",
                    "service": "stock-predictor-api",
                })
            );
        }
    }

    #[test]
    fn test_listing() {
        let response = Router::default().route("/api/v1/stocks");
        assert_eq!(response.status, StatusCode::OK);

        let entries = response.body.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e["sector"] == "defense"));

        let symbols: Vec<&str> = entries.iter().map(|e| e["symbol"].as_str().unwrap()).collect();
        assert_eq!(symbols, vec!["BA", "LHX", "LMT", "NOC", "RTX"]);
    }

    #[test]
    fn test_unknown_route() {
        let response = Router::default().route("/unknown/path");
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(
            response.body,
            json!({ "error": "Not found", "path": "/unknown/path" })
        );
    }

    #[test]
    fn test_near_misses_fall_through() {
        let router = Router::default();
        for path in ["", "/", "/health/", "/api/v1/stock", "/api/v1/stocksLMT", "/API/V1/STOCKS"] {
            let response = router.route(path);
            assert_eq!(response.status, StatusCode::NOT_FOUND, "path {path:?}");
            assert_eq!(response.body["error"], "Not found");
            assert_eq!(response.body["path"], path);
        }
    }

    #[test]
    fn test_detail_timestamp_uses_now() {
        let response = Router::default().route_at("/api/v1/stocks/BA", fixed_now());
        assert_eq!(response.body["last_updated"], "2025-09-30T14:03:09Z");
    }

    #[test]
    fn test_nested_symbol_is_not_found() {
        let response = Router::default().route("/api/v1/stocks/LMT/history");
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["symbol"], "LMT/history");
    }

    #[test]
    fn test_match_path() {
        let router = Router::default();
        assert_eq!(
            router.match_path("/api/v1/stocks/RTX"),
            Some(RouteMatch {
                endpoint: Endpoint::StockDetail,
                capture: "RTX"
            })
        );
        assert_eq!(
            router.match_path("/api/v1/stocks").map(|m| m.endpoint),
            Some(Endpoint::ListStocks)
        );
        assert_eq!(router.match_path("/nope"), None);
    }

    #[test]
    fn test_custom_registry() {
        let registry = StockRegistry::from_records(vec![crate::stocks::StockRecord::new(
            "GD",
            "General Dynamics",
        )]);
        let router = Router::new(Arc::new(registry));

        assert_eq!(router.route("/api/v1/stocks").body.as_array().unwrap().len(), 1);
        assert_eq!(router.route("/api/v1/stocks/GD").body["name"], "General Dynamics");
        assert_eq!(router.route("/api/v1/stocks/LMT").status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_route_json_is_compact() {
        assert_eq!(
            Router::default().route_json("/api/v1/stocks/"),
            r#"{"error":"Missing symbol"}"#
        );
    }

    #[test]
    fn test_router_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }
}
