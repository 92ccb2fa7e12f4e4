use once_cell::sync::Lazy;

use super::config::*;
use super::descriptor::RawBlock;
use super::registry::{BlockRegistry, UnknownBlockType};

/// Normalizers for every block type of the content model, without handlers.
static CONTENT_MODEL: Lazy<BlockRegistry<()>> = Lazy::new(|| {
    BlockRegistry::<()>::builder()
        .register::<HorizontalRuleConfig>(())
        .register::<SectorSelectorConfig>(())
        .register::<JitterPlotConfig>(())
        .register::<PayorBreakdownConfig>(())
        .register::<TextSectionConfig>(())
        .register::<IndicatorMapConfig>(())
        .build()
});

/// Resolve an authored descriptor into its rendering configuration.
///
/// Total for every known tag: missing, malformed or out-of-range fields fall
/// back to the block type's own defaults. Idempotent through
/// [`BlockConfig::to_raw`].
pub fn normalize(raw: &RawBlock) -> Result<BlockConfig, UnknownBlockType> {
    CONTENT_MODEL.normalize(raw)
}

/// Tags of every block type the content model defines.
pub fn known_tags() -> Vec<&'static str> {
    CONTENT_MODEL.tags()
}
