use serde::{Deserialize, Serialize};

use super::SectorScoped;
use crate::domain::a001_locality::{IndicatorKey, Locality};
use crate::enums::Sector;

/// One dot of the jitter plot: a locality's per-capita cost in one sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JitterPoint {
    pub locality: String,
    pub fips: String,
    pub sector: Sector,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JitterDataset {
    pub points: Vec<JitterPoint>,
}

impl JitterDataset {
    /// One point per locality and specific sector, read from the sector's indicator field.
    pub fn from_localities(localities: &[Locality]) -> Self {
        let points = localities
            .iter()
            .flat_map(|loc| {
                Sector::specific().into_iter().map(move |sector| JitterPoint {
                    locality: loc.name.clone(),
                    fips: loc.fips.clone(),
                    sector,
                    value: loc.indicator(IndicatorKey::for_sector(sector)),
                })
            })
            .collect();
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SectorScoped for JitterDataset {
    type Visible = Vec<JitterPoint>;

    fn compute_visible(&self, sector: Sector) -> Vec<JitterPoint> {
        if sector.is_all() {
            return self.points.clone();
        }
        self.points
            .iter()
            .filter(|p| p.sector == sector)
            .cloned()
            .collect()
    }
}

/// `(min, max)` of the visible values, `None` for an empty set.
pub fn value_extent(points: &[JitterPoint]) -> Option<(f64, f64)> {
    points.iter().map(|p| p.value).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Deterministic vertical offset in `[-1.0, 1.0]` for a point.
///
/// Derived from the locality name and sector (FNV-1a) so dots do not jump
/// around between re-renders.
pub fn jitter_offset(point: &JitterPoint) -> f64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in point.locality.bytes().chain(point.sector.code().bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0100_0000_01b3);
    }
    (hash % 2001) as f64 / 1000.0 - 1.0
}
