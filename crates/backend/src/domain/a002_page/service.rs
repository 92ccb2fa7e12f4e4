use contracts::domain::a002_page::{is_valid_slug, PageBundle};
use thiserror::Error;

use super::repository;
use crate::domain::a001_locality::repository as locality_repository;
use crate::shared::content_store::{ContentStore, ContentStoreError};

#[derive(Debug, Error)]
pub enum PageFetchError {
    #[error("invalid page slug")]
    InvalidSlug,

    #[error("page `{0}` not found")]
    NotFound(String),

    #[error("page data fetch failed: {0}")]
    DataFetch(#[from] ContentStoreError),
}

/// Page content and locality roster for the first render.
///
/// Both reads are issued concurrently and both must succeed; a failure of
/// either one fails the bundle.
pub async fn load_bundle(store: &dyn ContentStore, slug: &str) -> Result<PageBundle, PageFetchError> {
    if !is_valid_slug(slug) {
        return Err(PageFetchError::InvalidSlug);
    }

    let (page, localities) = tokio::try_join!(
        repository::get_by_slug(store, slug),
        locality_repository::list_all(store),
    )?;

    let page = page.ok_or_else(|| PageFetchError::NotFound(slug.to_string()))?;
    tracing::info!(
        "Page {}: {} blocks, {} localities",
        slug,
        page.blocks.len(),
        localities.len()
    );
    Ok(PageBundle { page, localities })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content_store::testing::RecordingStore;
    use serde_json::{json, Value};

    fn store(page: Value) -> RecordingStore {
        RecordingStore::new(move |query, params| {
            if query.contains("_type == \"page\"") {
                assert_eq!(params.get("slug"), Some(&json!("home")));
                Ok(page.clone())
            } else {
                Ok(json!([{ "_id": "a", "name": "Alpha", "fips": "01001" }]))
            }
        })
    }

    #[tokio::test]
    async fn test_bundle_has_page_and_roster() {
        let store = store(json!({
            "_id": "p1",
            "title": "Home",
            "slug": "home",
            "blocks": [{ "_type": "horizontalRule", "_key": "r1" }]
        }));

        let bundle = load_bundle(&store, "home").await.unwrap();
        assert_eq!(bundle.page.title, "Home");
        assert_eq!(bundle.page.blocks.len(), 1);
        assert_eq!(bundle.localities.len(), 1);
        assert_eq!(store.calls(), 2);
    }

    #[tokio::test]
    async fn test_missing_page_is_not_found() {
        let store = store(Value::Null);
        assert!(matches!(
            load_bundle(&store, "home").await,
            Err(PageFetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_slug_issues_no_query() {
        let store = store(Value::Null);
        assert!(matches!(
            load_bundle(&store, "Home\" || true").await,
            Err(PageFetchError::InvalidSlug)
        ));
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_roster_failure_fails_bundle() {
        let store = RecordingStore::new(|query, _| {
            if query.contains("locality") {
                Err(ContentStoreError::Status { status: 503, body: String::new() })
            } else {
                Ok(json!({ "_id": "p1", "title": "Home", "slug": "home", "blocks": [] }))
            }
        });
        assert!(matches!(
            load_bundle(&store, "home").await,
            Err(PageFetchError::DataFetch(_))
        ));
    }
}
