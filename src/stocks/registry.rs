//! Immutable symbol table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::StockConfig;

/// Built-in defense sector table, used when the config does not override it.
const DEFENSE_SECTOR: [(&str, &str); 5] = [
    ("LMT", "Lockheed Martin"),
    ("RTX", "Raytheon Technologies"),
    ("BA", "Boeing"),
    ("NOC", "Northrop Grumman"),
    ("LHX", "L3Harris Technologies"),
];

/// A single known stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
}

impl StockRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// Symbol → record mapping, ordered by symbol.
#[derive(Debug, Clone, Default)]
pub struct StockRegistry {
    records: BTreeMap<String, StockRecord>,
}

impl StockRegistry {
    /// Build a registry from records. A later record with the same symbol
    /// replaces an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = StockRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| (r.symbol.clone(), r))
            .collect();
        Self { records }
    }

    /// The five defense contractors served by default.
    pub fn defense_sector() -> Self {
        Self::from_records(
            DEFENSE_SECTOR
                .iter()
                .map(|(symbol, name)| StockRecord::new(*symbol, *name)),
        )
    }

    /// Build from the `[[stocks]]` config table.
    pub fn from_config(stocks: &[StockConfig]) -> Self {
        Self::from_records(
            stocks
                .iter()
                .map(|s| StockRecord::new(s.symbol.clone(), s.name.clone())),
        )
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, symbol: &str) -> Option<&StockRecord> {
        self.records.get(symbol)
    }

    /// All records, sorted by symbol.
    pub fn list_all(&self) -> impl Iterator<Item = &StockRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Default `[[stocks]]` entries for the config schema.
pub(crate) fn default_stock_configs() -> Vec<StockConfig> {
    DEFENSE_SECTOR
        .iter()
        .map(|(symbol, name)| StockConfig {
            symbol: symbol.to_string(),
            name: name.to_string(),
        })
        .collect()
}
