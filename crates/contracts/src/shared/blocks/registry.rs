use std::collections::HashMap;
use thiserror::Error;

use super::config::{BlockConfig, BlockSpec};
use super::descriptor::{Fields, RawBlock};

type NormalizeFn = fn(&Fields) -> BlockConfig;

fn normalize_as<B: BlockSpec>(fields: &Fields) -> BlockConfig {
    B::from_fields(fields).into()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown block type `{0}`")]
pub struct UnknownBlockType(pub String);

struct Entry<H> {
    normalize: NormalizeFn,
    handler: H,
}

/// Collects registrations; consumed by [`build`](Self::build).
pub struct BlockRegistryBuilder<H> {
    entries: HashMap<&'static str, Entry<H>>,
}

impl<H> BlockRegistryBuilder<H> {
    /// Register handler `handler` for block type `B`. A later registration
    /// for the same tag replaces the earlier one.
    pub fn register<B: BlockSpec>(mut self, handler: H) -> Self {
        self.entries.insert(
            B::TAG,
            Entry {
                normalize: normalize_as::<B>,
                handler,
            },
        );
        self
    }

    pub fn build(self) -> BlockRegistry<H> {
        BlockRegistry {
            entries: self.entries,
        }
    }
}

/// Result of dispatching one block of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched<R> {
    Rendered {
        index: usize,
        key: Option<String>,
        output: R,
    },
    Skipped {
        index: usize,
        tag: String,
    },
}

impl<R> Dispatched<R> {
    pub fn output(self) -> Option<R> {
        match self {
            Dispatched::Rendered { output, .. } => Some(output),
            Dispatched::Skipped { .. } => None,
        }
    }
}

/// Immutable map from block type tag to (normalizer, handler).
///
/// Built once at start-up; there is no way to add or remove entries afterwards,
/// so lookups during rendering never race with registration.
pub struct BlockRegistry<H> {
    entries: HashMap<&'static str, Entry<H>>,
}

impl<H> BlockRegistry<H> {
    pub fn builder() -> BlockRegistryBuilder<H> {
        BlockRegistryBuilder {
            entries: HashMap::new(),
        }
    }

    pub fn resolve(&self, tag: &str) -> Option<&H> {
        self.entries.get(tag).map(|e| &e.handler)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn normalize(&self, raw: &RawBlock) -> Result<BlockConfig, UnknownBlockType> {
        self.entries
            .get(raw.type_tag.as_str())
            .map(|e| (e.normalize)(&raw.fields))
            .ok_or_else(|| UnknownBlockType(raw.type_tag.clone()))
    }

    /// Walk `blocks` in order, handing each normalized config to its handler.
    ///
    /// Unknown tags are reported as [`Dispatched::Skipped`]; they never stop
    /// the rest of the sequence from rendering.
    pub fn dispatch<'a, R, F>(&'a self, blocks: &[RawBlock], mut render: F) -> Vec<Dispatched<R>>
    where
        F: FnMut(&'a H, BlockConfig) -> R,
    {
        blocks
            .iter()
            .enumerate()
            .map(|(index, raw)| match self.entries.get(raw.type_tag.as_str()) {
                Some(entry) => Dispatched::Rendered {
                    index,
                    key: raw.key.clone(),
                    output: render(&entry.handler, (entry.normalize)(&raw.fields)),
                },
                None => Dispatched::Skipped {
                    index,
                    tag: raw.type_tag.clone(),
                },
            })
            .collect()
    }
}
