//! Block type → renderer table used by every page.
//!
//! The table is built once on first use and is read-only afterwards. Adding a
//! block type means one config struct in `contracts::shared::blocks::config`,
//! one `register::<B>()` line below and one renderer module.

use std::sync::Arc;

use contracts::domain::a001_locality::Locality;
use contracts::shared::blocks::config::*;
use contracts::shared::blocks::{BlockConfig, BlockRegistry, Dispatched, RawBlock};
use leptos::prelude::*;
use once_cell::sync::Lazy;

use super::{
    horizontal_rule, indicator_map, jitter_plot, payor_breakdown, sector_selector, text_section,
};

/// Data shared by all blocks of one page.
#[derive(Debug, Clone, Default)]
pub struct PageEnv {
    pub localities: Arc<Vec<Locality>>,
}

impl PageEnv {
    pub fn new(localities: Vec<Locality>) -> Self {
        Self {
            localities: Arc::new(localities),
        }
    }
}

/// Renders one normalized block.
pub type BlockRenderer = fn(BlockConfig, &PageEnv) -> AnyView;

pub static BLOCKS: Lazy<BlockRegistry<BlockRenderer>> = Lazy::new(|| {
    BlockRegistry::<BlockRenderer>::builder()
        .register::<HorizontalRuleConfig>(horizontal_rule::render)
        .register::<SectorSelectorConfig>(sector_selector::render)
        .register::<JitterPlotConfig>(jitter_plot::render)
        .register::<PayorBreakdownConfig>(payor_breakdown::render)
        .register::<TextSectionConfig>(text_section::render)
        .register::<IndicatorMapConfig>(indicator_map::render)
        .build()
});

/// Render every known block in order. Unknown block types are logged and
/// left out; the rest of the page still renders.
pub fn render_blocks(blocks: &[RawBlock], env: &PageEnv) -> Vec<AnyView> {
    BLOCKS
        .dispatch(blocks, |render, config| render(config, env))
        .into_iter()
        .filter_map(|item| match item {
            Dispatched::Rendered { output, .. } => Some(output),
            Dispatched::Skipped { index, tag } => {
                log::warn!("Skipping block #{} with unknown type `{}`", index, tag);
                None
            }
        })
        .collect()
}

/// Fallback for a renderer handed another block's config; the registry
/// pairs tags with renderers, so reaching it means a wrong registration.
pub(super) fn mismatched(expected: &str, config: &BlockConfig) -> AnyView {
    log::error!(
        "Renderer for `{}` received a `{}` block",
        expected,
        config.tag()
    );
    ().into_any()
}
