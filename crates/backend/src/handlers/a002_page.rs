use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_page::PageBundle;

use crate::domain::a002_page::service::{self, PageFetchError};
use crate::routes::AppState;

/// GET /api/pages/:slug
///
/// Page content plus the locality roster in one response.
pub async fn get_bundle(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PageBundle>, StatusCode> {
    match service::load_bundle(state.store.as_ref(), &slug).await {
        Ok(bundle) => Ok(Json(bundle)),
        Err(PageFetchError::InvalidSlug) => {
            tracing::warn!("Pages: rejected slug {:?}", slug.chars().take(100).collect::<String>());
            Err(StatusCode::BAD_REQUEST)
        }
        Err(PageFetchError::NotFound(slug)) => {
            tracing::warn!("Pages: {} not found", slug);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e @ PageFetchError::DataFetch(_)) => {
            tracing::error!("Pages: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::content_store::testing::RecordingStore;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn store_with_page(page: Value) -> RecordingStore {
        RecordingStore::new(move |query, _| {
            if query.contains("\"page\"") {
                Ok(page.clone())
            } else {
                Ok(json!([]))
            }
        })
    }

    #[tokio::test]
    async fn test_status_codes() {
        let state = AppState::new(Arc::new(store_with_page(Value::Null)));
        assert_eq!(
            get_bundle(State(state.clone()), Path("missing".into())).await.unwrap_err(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_bundle(State(state), Path("../etc".into())).await.unwrap_err(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_bundle_ok() {
        let store = store_with_page(json!({ "_id": "p", "title": "Home", "slug": "home", "blocks": [] }));
        let Json(bundle) = get_bundle(State(AppState::new(Arc::new(store))), Path("home".into()))
            .await
            .unwrap();
        assert_eq!(bundle.page.slug, "home");
        assert!(bundle.localities.is_empty());
    }
}
