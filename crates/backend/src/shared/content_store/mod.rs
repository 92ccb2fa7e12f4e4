//! Read-only boundary to the headless content store.
//!
//! Everything above this module talks to [`ContentStore`]; only
//! [`sanity::SanityClient`] knows about HTTP.

pub mod sanity;

#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Named query parameters (`$slug` etc.), sent separately from the query text.
pub type QueryParams = BTreeMap<String, Value>;

#[derive(Debug, Clone, Error)]
pub enum ContentStoreError {
    #[error("content store unreachable: {0}")]
    Transport(String),

    #[error("content store returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed content store response: {0}")]
    Malformed(String),
}

/// Query-capable read interface over the content store.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Run a projection query and return its `result` payload.
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentStoreError>;

    /// Short name for logs
    fn store_name(&self) -> &str;
}

pub type SharedContentStore = Arc<dyn ContentStore>;

/// Deserialize a query result into `T`, mapping shape mismatches to `Malformed`.
pub fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ContentStoreError> {
    serde_json::from_value(value).map_err(|e| ContentStoreError::Malformed(e.to_string()))
}
