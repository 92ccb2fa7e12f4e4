pub mod aggregate;
pub mod indicator_key;

pub use aggregate::{indicator_map, IndicatorMap, Locality};
pub use indicator_key::{IndicatorKey, IndicatorKeyError, INDICATOR_KEYS};
