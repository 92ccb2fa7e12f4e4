use contracts::domain::a002_page::Page;
use serde_json::Value;

use crate::shared::content_store::{decode, ContentStore, ContentStoreError, QueryParams};

/// Slug is bound as `$slug`, never spliced into the query text.
pub const PAGE_QUERY: &str = r#"*[_type == "page" && slug.current == $slug][0] { _id, title, "slug": slug.current, "blocks": coalesce(content, []) }"#;

pub async fn get_by_slug(
    store: &dyn ContentStore,
    slug: &str,
) -> Result<Option<Page>, ContentStoreError> {
    let mut params = QueryParams::new();
    params.insert("slug".into(), Value::String(slug.to_string()));

    match store.query(PAGE_QUERY, &params).await? {
        Value::Null => Ok(None),
        value => decode(value).map(Some),
    }
}
