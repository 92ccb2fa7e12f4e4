use serde::{Deserialize, Serialize};

use crate::domain::a001_locality::Locality;
use crate::shared::blocks::RawBlock;

/// Authored page: title plus the ordered, heterogeneous block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default, deserialize_with = "crate::shared::blocks::descriptor::deserialize_block_list")]
    pub blocks: Vec<RawBlock>,
}

/// Everything the first render of a page needs, fetched in one round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBundle {
    pub page: Page,
    pub localities: Vec<Locality>,
}

/// Slugs reach the store as query parameters; this keeps them to the shape
/// the authoring tool generates (`a-z`, `0-9`, `-`).
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= 96
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
