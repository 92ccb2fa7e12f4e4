//! Authored content blocks: raw descriptors, validated rendering
//! configurations and the registry that dispatches between them.

pub mod config;
pub mod descriptor;
pub mod normalize;
pub mod presets;
pub mod registry;

pub use config::{BlockConfig, BlockSpec};
pub use descriptor::{Fields, RawBlock};
pub use normalize::{known_tags, normalize};
pub use registry::{BlockRegistry, BlockRegistryBuilder, Dispatched, UnknownBlockType};
