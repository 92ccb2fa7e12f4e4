pub mod horizontal_rule;
pub mod indicator_map;
pub mod jitter_plot;
pub mod payor_breakdown;
pub mod registry;
pub mod renderer;
pub mod sector_selector;
pub mod text_section;
