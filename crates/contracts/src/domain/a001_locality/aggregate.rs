use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::indicator_key::IndicatorKey;
use crate::shared::numbers::lenient_f64;

/// Indicator values keyed by locality display name.
///
/// `BTreeMap` keeps the JSON output ordered by name, matching the store query order.
pub type IndicatorMap = BTreeMap<String, f64>;

// ============================================================================
// Aggregate
// ============================================================================

/// Jurisdiction (county) record, read-only snapshot of a `locality` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    /// Display name, also the join key for every visualization
    pub name: String,

    #[serde(default)]
    pub fips: String,

    /// Indicator values; null / non-numeric values are stored as `0.0`
    #[serde(default, deserialize_with = "deserialize_indicators")]
    pub indicators: BTreeMap<String, f64>,
}

impl Locality {
    pub fn new(id: impl Into<String>, name: impl Into<String>, fips: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fips: fips.into(),
            indicators: BTreeMap::new(),
        }
    }

    pub fn with_indicator(mut self, key: IndicatorKey, value: f64) -> Self {
        self.indicators.insert(key.as_str().to_string(), value);
        self
    }

    /// Indicator value, `0.0` when the locality does not carry it.
    pub fn indicator(&self, key: IndicatorKey) -> f64 {
        self.indicators.get(key.as_str()).copied().unwrap_or(0.0)
    }
}

fn deserialize_indicators<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(k, v)| {
            let value = lenient_f64(&v).unwrap_or(0.0);
            (k, value)
        })
        .collect())
}

/// Build a name-keyed map for one indicator out of a roster.
///
/// Duplicate names keep the last record.
pub fn indicator_map(localities: &[Locality], key: IndicatorKey) -> IndicatorMap {
    localities
        .iter()
        .map(|l| (l.name.clone(), l.indicator(key)))
        .collect()
}
