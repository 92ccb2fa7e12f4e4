use contracts::domain::a002_page::PageBundle;

use crate::shared::api_utils::{get_json, ApiError};

/// Page content plus locality roster; `Ok(None)` when the slug is unknown.
pub async fn fetch_page_bundle(slug: &str) -> Result<Option<PageBundle>, ApiError> {
    match get_json::<PageBundle>(&format!("/api/pages/{}", slug)).await {
        Ok(bundle) => Ok(Some(bundle)),
        Err(ApiError::Status(404)) | Err(ApiError::Status(400)) => Ok(None),
        Err(e) => Err(e),
    }
}
