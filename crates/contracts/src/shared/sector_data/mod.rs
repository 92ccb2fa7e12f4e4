//! Sector-scoped views over per-locality datasets.
//!
//! The split of a cost figure across sectors is input data (authored rows or
//! per-sector indicator fields); nothing here derives or re-weights it.

pub mod jitter;
pub mod payor;

use crate::enums::Sector;

pub use jitter::{JitterDataset, JitterPoint};
pub use payor::{PayorBreakdownView, PayorLine, PayorRow};

/// Dataset that a visualization narrows to the selected sector.
///
/// `compute_visible` is pure and synchronous; callers recompute on every
/// selection change instead of caching results across selections.
pub trait SectorScoped {
    type Visible;

    fn compute_visible(&self, sector: Sector) -> Self::Visible;
}
