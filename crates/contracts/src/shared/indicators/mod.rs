use serde::{Deserialize, Serialize};

use crate::domain::a001_locality::IndicatorKey;
use crate::enums::Sector;

// ---------------------------------------------------------------------------
// Indicator display metadata
// ---------------------------------------------------------------------------

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Integer,
}

/// Static metadata describing one allow-listed indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub key: IndicatorKey,
    pub label: String,
    pub format: ValueFormat,
    pub description: Option<String>,
    /// Sector whose figures this indicator carries, `None` for cross-sector ones.
    pub sector: Option<Sector>,
}

// ---------------------------------------------------------------------------
// API request / response
// ---------------------------------------------------------------------------

/// Query string of `GET /api/indicator`.
///
/// Kept as a raw string so a missing or unknown key is reported by the
/// handler as `400` instead of an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorQuery {
    #[serde(default)]
    pub indicator: Option<String>,
}

/// Full catalogue returned by the metadata endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorCatalogResponse {
    pub indicators: Vec<IndicatorMeta>,
    pub sectors: Vec<Sector>,
}

impl IndicatorCatalogResponse {
    pub fn find(&self, key: IndicatorKey) -> Option<&IndicatorMeta> {
        self.indicators.iter().find(|m| m.key == key)
    }
}
