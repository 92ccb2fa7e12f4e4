pub mod fetcher;
pub mod metadata;

pub use fetcher::{fetch_indicator_map, IndicatorFetchError};
