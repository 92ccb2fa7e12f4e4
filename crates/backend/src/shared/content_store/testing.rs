use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ContentStore, ContentStoreError, QueryParams};

/// Test double: answers each query through a routing closure and records
/// every call it receives.
pub struct RecordingStore {
    route: Box<dyn Fn(&str, &QueryParams) -> Result<Value, ContentStoreError> + Send + Sync>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub fn new<F>(route: F) -> Self
    where
        F: Fn(&str, &QueryParams) -> Result<Value, ContentStoreError> + Send + Sync + 'static,
    {
        Self {
            route: Box::new(route),
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Every query returns `value`.
    pub fn returning(value: Value) -> Self {
        Self::new(move |_, _| Ok(value.clone()))
    }

    /// Every query fails with `err`.
    pub fn failing(err: ContentStoreError) -> Self {
        Self::new(move |_, _| Err(err.clone()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for RecordingStore {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());
        (self.route)(query, params)
    }

    fn store_name(&self) -> &str {
        "recording"
    }
}
