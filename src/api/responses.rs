//! Response bodies and their formatters.
//!
//! Market figures in the detail response are fixed mock values: every
//! symbol reports the same price, change and prediction.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::stocks::StockRecord;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "stock-predictor-api";

/// Sector reported for every listed stock.
pub const SECTOR: &str = "defense";

const MOCK_CURRENT_PRICE: f64 = 425.67;
const MOCK_CHANGE: &str = "+2.34";
const MOCK_CHANGE_PERCENT: &str = "+0.55%";
const MOCK_PREDICTION_7D: f64 = 430.80;
const MOCK_CONFIDENCE: f64 = 0.72;
const MOCK_52_WEEK_HIGH: f64 = 445.50;
const MOCK_52_WEEK_LOW: f64 = 380.25;
const MOCK_VOLUME: u64 = 1_250_000;
const MOCK_MARKET_CAP: &str = "68.5B";

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn new(timestamp: String) -> Self {
        Self {
            status: "OK",
            timestamp,
            service: SERVICE_NAME,
        }
    }
}

/// One entry of the listing.
#[derive(Debug, Clone, Serialize)]
pub struct StockSummary<'a> {
    pub symbol: &'a str,
    pub name: &'a str,
    pub sector: &'static str,
}

impl<'a> From<&'a StockRecord> for StockSummary<'a> {
    fn from(record: &'a StockRecord) -> Self {
        Self {
            symbol: &record.symbol,
            name: &record.name,
            sector: SECTOR,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StockDetail<'a> {
    pub symbol: &'a str,
    pub name: &'a str,
    pub current_price: f64,
    pub change: &'static str,
    pub change_percent: &'static str,
    pub last_updated: String,
    pub prediction_7d: f64,
    pub confidence: f64,
    #[serde(rename = "52_week_high")]
    pub week_52_high: f64,
    #[serde(rename = "52_week_low")]
    pub week_52_low: f64,
    pub volume: u64,
    pub market_cap: &'static str,
}

impl<'a> StockDetail<'a> {
    pub fn mock(record: &'a StockRecord, last_updated: String) -> Self {
        Self {
            symbol: &record.symbol,
            name: &record.name,
            current_price: MOCK_CURRENT_PRICE,
            change: MOCK_CHANGE,
            change_percent: MOCK_CHANGE_PERCENT,
            last_updated,
            prediction_7d: MOCK_PREDICTION_7D,
            confidence: MOCK_CONFIDENCE,
            week_52_high: MOCK_52_WEEK_HIGH,
            week_52_low: MOCK_52_WEEK_LOW,
            volume: MOCK_VOLUME,
            market_cap: MOCK_MARKET_CAP,
        }
    }
}

/// A routed response: HTTP status plus JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// 200 with the given body serialized.
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status: StatusCode::OK,
                body,
            },
            // Only reachable for non-string map keys, which none of our types have
            Err(e) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: serde_json::json!({ "error": e.to_string() }),
            },
        }
    }

    /// Compact JSON text of the body.
    pub fn to_json_string(&self) -> String {
        self.body.to_string()
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status(),
            body: err.to_body(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_health_body() {
        let response = ApiResponse::ok(&HealthResponse::new("2025-01-01T00:00:00Z".into()));
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            response.body,
            json!({
                "status": "OK",
                "timestamp": "2025-01-01T00:00:00Z",
                "service": "stock-predictor-api",
            })
        );
    }

    #[test]
    fn test_detail_field_types() {
        let record = StockRecord::new("NOC", "Northrop Grumman");
        let body = ApiResponse::ok(&StockDetail::mock(&record, "2025-01-01T00:00:00Z".into())).body;

        assert_eq!(body["symbol"], "NOC");
        assert_eq!(body["name"], "Northrop Grumman");
        assert!(body["current_price"].is_f64());
        assert!(body["prediction_7d"].is_f64());
        assert!(body["confidence"].is_f64());
        assert_eq!(body["change"], "+2.34");
        assert_eq!(body["change_percent"], "+0.55%");
        assert_eq!(body["last_updated"], "2025-01-01T00:00:00Z");
        assert_eq!(body["52_week_high"], 445.5);
        assert_eq!(body["volume"], 1_250_000);
        assert_eq!(body["market_cap"], "68.5B");
    }

    #[test]
    fn test_bodies_keep_field_order() {
        let record = StockRecord::new("LMT", "Lockheed Martin");
        let detail = ApiResponse::ok(&StockDetail::mock(&record, "2025-01-01T00:00:00Z".into()));
        let keys: Vec<&str> = detail.body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "symbol",
                "name",
                "current_price",
                "change",
                "change_percent",
                "last_updated",
                "prediction_7d",
                "confidence",
                "52_week_high",
                "52_week_low",
                "volume",
                "market_cap",
            ]
        );

        let health = ApiResponse::ok(&HealthResponse::new("2025-01-01T00:00:00Z".into()));
        assert_eq!(
            health.to_json_string(),
            r#"{"status":"OK","timestamp":"2025-01-01T00:00:00Z","service":"stock-predictor-api"}"#
        );
    }

    #[test]
    fn test_error_conversion() {
        let response = ApiResponse::from(ApiError::MissingSymbol);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.to_json_string(), r#"{"error":"Missing symbol"}"#);
    }
}
