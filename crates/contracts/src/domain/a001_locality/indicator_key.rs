use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Sector;

// ============================================================================
// Allow-list
// ============================================================================

/// Every indicator field a locality document may be projected on.
///
/// Keys are interpolated into store queries as field names, so nothing
/// outside this list may ever reach the query builder.
pub const INDICATOR_KEYS: &[&str] = &[
    "Total_PerCapita",
    "Labor_PerCapita",
    "Healthcare_PerCapita",
    "ChildServices_PerCapita",
    "Justice_PerCapita",
    "Household_Cost",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorKeyError {
    #[error("indicator key is missing")]
    Missing,

    #[error("indicator key `{0}` is not allow-listed")]
    NotAllowed(String),
}

/// Validated indicator field name.
///
/// Only constructible through [`IndicatorKey::parse`] (or the sector mapping),
/// so holding one proves the key is allow-listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndicatorKey(&'static str);

impl IndicatorKey {
    pub fn parse(raw: &str) -> Result<Self, IndicatorKeyError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(IndicatorKeyError::Missing);
        }
        INDICATOR_KEYS
            .iter()
            .find(|k| **k == raw)
            .map(|k| IndicatorKey(*k))
            .ok_or_else(|| IndicatorKeyError::NotAllowed(raw.chars().take(64).collect()))
    }

    /// Same as [`parse`](Self::parse) but treats `None` as a missing key.
    pub fn parse_opt(raw: Option<&str>) -> Result<Self, IndicatorKeyError> {
        match raw {
            Some(s) => Self::parse(s),
            None => Err(IndicatorKeyError::Missing),
        }
    }

    pub fn total_per_capita() -> Self {
        IndicatorKey("Total_PerCapita")
    }

    /// Field carrying the per-capita figure attributed to `sector`.
    pub fn for_sector(sector: Sector) -> Self {
        match sector {
            Sector::AllSectors => IndicatorKey("Total_PerCapita"),
            Sector::LostLabor => IndicatorKey("Labor_PerCapita"),
            Sector::Healthcare => IndicatorKey("Healthcare_PerCapita"),
            Sector::ChildServicesK12 => IndicatorKey("ChildServices_PerCapita"),
            Sector::CriminalJustice => IndicatorKey("Justice_PerCapita"),
        }
    }

    pub fn all() -> Vec<IndicatorKey> {
        INDICATOR_KEYS.iter().map(|k| IndicatorKey(*k)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl<'de> Deserialize<'de> for IndicatorKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        IndicatorKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_allow_listed_key_parses() {
        for key in INDICATOR_KEYS {
            assert_eq!(IndicatorKey::parse(key).unwrap().as_str(), *key);
        }
    }

    #[test]
    fn test_rejects_unknown_and_injected_keys() {
        assert_eq!(IndicatorKey::parse(""), Err(IndicatorKeyError::Missing));
        assert_eq!(IndicatorKey::parse("   "), Err(IndicatorKeyError::Missing));
        assert_eq!(IndicatorKey::parse_opt(None), Err(IndicatorKeyError::Missing));
        assert!(matches!(
            IndicatorKey::parse("total_percapita"),
            Err(IndicatorKeyError::NotAllowed(_))
        ));
        assert!(matches!(
            IndicatorKey::parse("Total_PerCapita, \"x\": *[_type == 'user']"),
            Err(IndicatorKeyError::NotAllowed(_))
        ));
    }

    #[test]
    fn test_sector_keys_are_allow_listed() {
        for sector in Sector::all() {
            let key = IndicatorKey::for_sector(sector);
            assert!(IndicatorKey::parse(key.as_str()).is_ok());
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: IndicatorKey = serde_json::from_str("\"Labor_PerCapita\"").unwrap();
        assert_eq!(ok.as_str(), "Labor_PerCapita");
        assert!(serde_json::from_str::<IndicatorKey>("\"Nope\"").is_err());
    }
}
